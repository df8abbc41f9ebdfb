//! core::error
//!
//! Domain errors for desk operations.
//!
//! Every variant is recoverable: the menu reports the message and keeps
//! running. The `Display` text is the operator-facing status line.

use std::fmt;

use thiserror::Error;

/// A required text field, named for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CustomerId,
    CustomerName,
    CustomerEmail,
    Subject,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::CustomerId => "Customer ID",
            Field::CustomerName => "Customer name",
            Field::CustomerEmail => "Customer email",
            Field::Subject => "Subject",
        };
        f.write_str(label)
    }
}

/// Errors from registry, action log, and desk operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeskError {
    /// A required field was empty after trimming.
    #[error("{0} cannot be empty.")]
    InvalidInput(Field),

    /// A customer with this id is already registered.
    #[error("Customer with this ID already exists.")]
    DuplicateId(String),

    /// No customer with this id is registered.
    #[error("Customer not found.")]
    CustomerNotFound(String),

    /// Serve was requested with an empty queue.
    #[error("No tickets to serve.")]
    EmptyQueue,

    /// Undo was requested with an empty action log.
    #[error("Nothing to undo.")]
    NothingToUndo,

    /// The target of an undo was no longer present. The log entry is
    /// consumed anyway.
    #[error("Undo failed: {0}.")]
    UndoFailed(String),
}

/// Result type for desk operations.
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_menu_wording() {
        assert_eq!(
            DeskError::InvalidInput(Field::CustomerId).to_string(),
            "Customer ID cannot be empty."
        );
        assert_eq!(
            DeskError::InvalidInput(Field::Subject).to_string(),
            "Subject cannot be empty."
        );
        assert_eq!(
            DeskError::DuplicateId("C001".into()).to_string(),
            "Customer with this ID already exists."
        );
        assert_eq!(
            DeskError::UndoFailed("customer not found".into()).to_string(),
            "Undo failed: customer not found."
        );
    }
}
