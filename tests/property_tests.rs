//! Property-based tests for the desk.
//!
//! These tests use proptest to verify undo and queue invariants hold
//! across randomly generated operation sequences.

use proptest::prelude::*;

use supportdesk::core::types::TicketId;
use supportdesk::core::DeskError;
use supportdesk::engine::Desk;

/// Strategy for generating valid customer fields.
fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9@._-]{1,20}"
}

/// Operations the menu can perform.
#[derive(Debug, Clone)]
enum Op {
    Create(usize, String),
    Serve,
    Undo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3, field()).prop_map(|(c, s)| Op::Create(c, s)),
        Just(Op::Serve),
        Just(Op::Undo),
    ]
}

fn seeded() -> Desk {
    let mut desk = Desk::new();
    desk.add_customer("C001", "Ava", "ava@example.com").unwrap();
    desk.add_customer("C002", "Ben", "ben@example.com").unwrap();
    desk.add_customer("C003", "Chloe", "chloe@example.com").unwrap();
    desk
}

fn snapshot(desk: &Desk) -> (Vec<u64>, usize, TicketId) {
    (
        desk.list_tickets().iter().map(|t| t.id.get()).collect(),
        desk.list_customers().len(),
        desk.next_ticket_id(),
    )
}

proptest! {
    /// Adding a customer then undoing leaves no trace of it.
    #[test]
    fn add_then_undo_restores_not_found(
        id in field(),
        name in field(),
        email in field(),
    ) {
        let mut desk = Desk::new();
        let added = desk.add_customer(&id, &name, &email).unwrap();
        prop_assert_eq!(desk.find_customer(&id), Some(&added));

        desk.undo_last().unwrap();
        prop_assert!(desk.find_customer(&id).is_none());
    }

    /// Each creation bumps the counter by one; undoing the latest takes it back.
    #[test]
    fn creation_counter_steps_by_one(subjects in prop::collection::vec(field(), 1..10)) {
        let mut desk = seeded();
        for (i, subject) in subjects.iter().enumerate() {
            let ticket = desk.create_ticket("C001", subject).unwrap();
            prop_assert_eq!(ticket.id.get(), i as u64 + 1);
            prop_assert_eq!(desk.next_ticket_id().get(), i as u64 + 2);
        }

        desk.undo_last().unwrap();
        prop_assert_eq!(desk.next_ticket_id().get(), subjects.len() as u64);
    }

    /// Undoing every recorded action returns the desk to its starting state.
    #[test]
    fn full_unwind_restores_initial_state(ops in prop::collection::vec(op(), 0..40)) {
        let customers = ["C001", "C002", "C003"];
        let mut desk = seeded();
        // Seed adds are on the log too; unwind only what the ops add.
        let start_history = desk.history().len();
        let start = snapshot(&desk);

        for op in &ops {
            match op {
                Op::Create(c, subject) => {
                    desk.create_ticket(customers[*c], subject).unwrap();
                }
                Op::Serve => {
                    let _ = desk.serve_next();
                }
                Op::Undo => {
                    if desk.history().len() > start_history {
                        desk.undo_last().unwrap();
                    }
                }
            }
        }

        while desk.history().len() > start_history {
            desk.undo_last().unwrap();
        }
        prop_assert_eq!(snapshot(&desk), start);
    }

    /// Served tickets always come out in ascending id order without undo.
    #[test]
    fn serving_is_fifo(subjects in prop::collection::vec(field(), 1..15)) {
        let mut desk = seeded();
        for subject in &subjects {
            desk.create_ticket("C002", subject).unwrap();
        }
        let mut served = Vec::new();
        while let Ok(ticket) = desk.serve_next() {
            served.push(ticket.id.get());
        }
        let expected: Vec<u64> = (1..=subjects.len() as u64).collect();
        prop_assert_eq!(served, expected);
        prop_assert_eq!(desk.serve_next(), Err(DeskError::EmptyQueue));
    }
}
