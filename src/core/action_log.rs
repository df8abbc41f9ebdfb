//! core::action_log
//!
//! Stack of reversible actions backing one-step undo.
//!
//! # Architecture
//!
//! Every successful mutation of the [`Registry`] is recorded as an
//! [`Action`] carrying enough state to reverse it. [`ActionLog::undo_last`]
//! pops the most recent action and applies its reversal.
//!
//! | Action | Reversal |
//! |--------|----------|
//! | `AddedCustomer` | remove the customer |
//! | `CreatedTicket` | remove the ticket from the queue, rewind the id counter if it was the latest |
//! | `ServedTicket` | put the ticket back at the head of the queue |
//!
//! # Invariants
//!
//! - Strictly LIFO: only the top entry can be undone
//! - An entry is consumed whether or not its reversal succeeds
//! - There is no redo
//!
//! # Example
//!
//! ```
//! use supportdesk::core::action_log::{Action, ActionLog, UndoOutcome};
//! use supportdesk::core::registry::Registry;
//!
//! let mut registry = Registry::new();
//! let mut log = ActionLog::new();
//!
//! let customer = registry.add_customer("C001", "Ava Martin", "ava@example.com").unwrap();
//! log.record(Action::AddedCustomer(customer));
//!
//! let outcome = log.undo_last(&mut registry).unwrap();
//! assert!(matches!(outcome, UndoOutcome::CustomerRemoved(_)));
//! assert!(registry.find_customer("C001").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::registry::Registry;
use super::types::{Customer, CustomerId, Ticket, TicketId};
use super::{DeskError, Result};

/// A recorded, reversible mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// A customer was registered.
    AddedCustomer(Customer),
    /// A ticket was created and enqueued.
    CreatedTicket(Ticket),
    /// A ticket was taken off the head of the queue.
    ServedTicket(Ticket),
}

impl Action {
    /// Short description for history listings.
    pub fn describe(&self) -> String {
        match self {
            Action::AddedCustomer(c) => format!("added customer {}", c.id),
            Action::CreatedTicket(t) => format!("created ticket #{}", t.id),
            Action::ServedTicket(t) => format!("served ticket #{}", t.id),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// What a successful undo changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A customer created by `AddedCustomer` was removed.
    CustomerRemoved(CustomerId),
    /// A ticket created by `CreatedTicket` was removed from the queue.
    TicketRemoved {
        id: TicketId,
        /// Whether the id counter was rolled back to `id`.
        counter_rewound: bool,
    },
    /// A ticket taken by `ServedTicket` is back at the head of the queue.
    TicketRestored(TicketId),
}

impl fmt::Display for UndoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoOutcome::CustomerRemoved(id) => write!(f, "Undo: removed customer {}", id),
            UndoOutcome::TicketRemoved { id, .. } => write!(f, "Undo: removed ticket #: {}", id),
            UndoOutcome::TicketRestored(id) => {
                write!(f, "Undo: restored served ticket #: {}", id)
            }
        }
    }
}

/// LIFO log of reversible actions.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an action onto the log.
    pub fn record(&mut self, action: Action) {
        self.entries.push(action);
    }

    /// The action `undo_last` would reverse next.
    pub fn peek(&self) -> Option<&Action> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending actions, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.entries.iter().rev()
    }

    /// Pop the most recent action and reverse it against `registry`.
    ///
    /// The entry is discarded even when the reversal fails.
    ///
    /// # Errors
    ///
    /// - `DeskError::NothingToUndo` if the log is empty (nothing is mutated)
    /// - `DeskError::UndoFailed` if the customer or ticket to remove is gone
    pub fn undo_last(&mut self, registry: &mut Registry) -> Result<UndoOutcome> {
        let action = self.entries.pop().ok_or(DeskError::NothingToUndo)?;

        match action {
            Action::AddedCustomer(customer) => {
                if !registry.remove_customer(&customer.id) {
                    return Err(DeskError::UndoFailed("customer not found".into()));
                }
                Ok(UndoOutcome::CustomerRemoved(customer.id))
            }
            Action::CreatedTicket(ticket) => {
                if !registry.remove_ticket_by_id(ticket.id) {
                    return Err(DeskError::UndoFailed("ticket not found".into()));
                }
                // Only the most recently issued id can be handed out again.
                let counter_rewound = registry.next_ticket_id() == ticket.id.next();
                if counter_rewound {
                    registry.rewind_ticket_counter(ticket.id);
                }
                Ok(UndoOutcome::TicketRemoved {
                    id: ticket.id,
                    counter_rewound,
                })
            }
            Action::ServedTicket(ticket) => {
                let id = ticket.id;
                registry.restore_ticket_at_head(ticket);
                Ok(UndoOutcome::TicketRestored(id))
            }
        }
    }
}
