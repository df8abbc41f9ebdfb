//! engine::desk
//!
//! The desk controller.
//!
//! # Architecture
//!
//! [`Desk`] owns the whole mutable state of a session: one [`Registry`] and
//! one [`ActionLog`]. Each user-facing operation calls the registry and, only
//! on success, records the matching [`Action`]. A failed operation records
//! nothing, so undo always targets the last change that actually happened.
//!
//! Seeding goes straight to the registry and is not undoable.
//!
//! # Example
//!
//! ```
//! use supportdesk::engine::Desk;
//!
//! let mut desk = Desk::new();
//! desk.add_customer("C001", "Ava Martin", "ava@example.com").unwrap();
//! let ticket = desk.create_ticket("C001", "X").unwrap();
//! assert_eq!(ticket.id.get(), 1);
//!
//! desk.serve_next().unwrap();
//! desk.undo_last().unwrap(); // ticket #1 back at the head
//! desk.undo_last().unwrap(); // ticket #1 removed, counter back to 1
//! assert!(desk.list_tickets().is_empty());
//! assert_eq!(desk.next_ticket_id().get(), 1);
//! ```

use crate::core::action_log::{Action, ActionLog, UndoOutcome};
use crate::core::config::SeedCustomer;
use crate::core::registry::Registry;
use crate::core::types::{Customer, Ticket, TicketId};
use crate::core::{DeskError, Result};
use crate::ui::output::{self, Verbosity};

/// Owned session state plus the operations the menu drives.
#[derive(Debug, Clone)]
pub struct Desk {
    registry: Registry,
    log: ActionLog,
    verbosity: Verbosity,
}

impl Default for Desk {
    fn default() -> Self {
        Self::new()
    }
}

impl Desk {
    /// Create an empty desk.
    pub fn new() -> Self {
        Self::with_verbosity(Verbosity::Normal)
    }

    /// Create an empty desk that logs at the given verbosity.
    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self {
            registry: Registry::new(),
            log: ActionLog::new(),
            verbosity,
        }
    }

    /// Register startup customers without recording undo entries.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid or duplicate seed.
    pub fn seed(&mut self, customers: &[SeedCustomer]) -> Result<usize> {
        for seed in customers {
            self.registry
                .add_customer(&seed.id, &seed.name, &seed.email)?;
        }
        output::debug(
            format!("seeded {} customer(s)", customers.len()),
            self.verbosity,
        );
        Ok(customers.len())
    }

    pub fn add_customer(&mut self, id: &str, name: &str, email: &str) -> Result<Customer> {
        let customer = self.registry.add_customer(id, name, email)?;
        output::debug(format!("added customer {}", customer.id), self.verbosity);
        self.log.record(Action::AddedCustomer(customer.clone()));
        Ok(customer)
    }

    pub fn find_customer(&self, id: &str) -> Option<&Customer> {
        self.registry.find_customer(id)
    }

    pub fn create_ticket(&mut self, customer_id: &str, subject: &str) -> Result<Ticket> {
        let ticket = self.registry.create_ticket(customer_id, subject)?;
        output::debug(
            format!(
                "created ticket #{} (next id {})",
                ticket.id,
                self.registry.next_ticket_id()
            ),
            self.verbosity,
        );
        self.log.record(Action::CreatedTicket(ticket.clone()));
        Ok(ticket)
    }

    /// Serve the ticket at the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::EmptyQueue` if there is nothing to serve.
    pub fn serve_next(&mut self) -> Result<Ticket> {
        let ticket = self.registry.serve_next().ok_or(DeskError::EmptyQueue)?;
        output::debug(format!("served ticket #{}", ticket.id), self.verbosity);
        self.log.record(Action::ServedTicket(ticket.clone()));
        Ok(ticket)
    }

    pub fn list_customers(&self) -> Vec<&Customer> {
        self.registry.list_customers()
    }

    pub fn list_tickets(&self) -> Vec<&Ticket> {
        self.registry.list_tickets()
    }

    /// Reverse the most recent recorded action.
    pub fn undo_last(&mut self) -> Result<UndoOutcome> {
        if let Some(action) = self.log.peek() {
            output::debug(format!("undoing: {}", action), self.verbosity);
        }

        let outcome = self.log.undo_last(&mut self.registry);
        match &outcome {
            Ok(UndoOutcome::TicketRemoved {
                counter_rewound: true,
                ..
            }) => output::debug(
                format!("ticket counter rewound to {}", self.registry.next_ticket_id()),
                self.verbosity,
            ),
            Err(DeskError::UndoFailed(reason)) => output::debug(
                format!("undo entry discarded: {}", reason),
                self.verbosity,
            ),
            _ => {}
        }
        outcome
    }

    /// Pending undo entries, most recent first.
    pub fn history(&self) -> Vec<&Action> {
        self.log.iter().collect()
    }

    pub fn next_ticket_id(&self) -> TicketId {
        self.registry.next_ticket_id()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
