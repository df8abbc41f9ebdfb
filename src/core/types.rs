//! core::types
//!
//! Strong types for the support desk domain.
//!
//! # Types
//!
//! - [`CustomerId`] - Non-empty, trimmed customer identifier
//! - [`TicketId`] - Monotonically assigned ticket number
//! - [`Customer`] - Immutable customer record
//! - [`Ticket`] - Queued support ticket
//!
//! # Validation
//!
//! Required text fields are trimmed and must be non-empty. Validation
//! happens at construction, so a [`Customer`] or [`Ticket`] in hand is
//! always well-formed.
//!
//! # Examples
//!
//! ```
//! use supportdesk::core::types::{Customer, CustomerId};
//!
//! let id = CustomerId::new("  C042 ").unwrap();
//! assert_eq!(id.as_str(), "C042");
//!
//! let customer = Customer::new("C042", "Dana Reyes", "dana@example.com").unwrap();
//! assert_eq!(customer.to_string(), "C042 | Dana Reyes | dana@example.com");
//!
//! assert!(CustomerId::new("   ").is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DeskError, Field};

/// Trim `value` and reject it if nothing is left.
pub(crate) fn required(value: &str, field: Field) -> Result<String, DeskError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DeskError::InvalidInput(field));
    }
    Ok(trimmed.to_string())
}

/// A validated customer identifier.
///
/// Leading and trailing whitespace is stripped; the remainder must be
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Create a new customer id.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` if the id is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> Result<Self, DeskError> {
        required(id.as_ref(), Field::CustomerId).map(Self)
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = DeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CustomerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ticket number.
///
/// Ticket numbers are handed out by the registry's counter, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// The first id issued by a fresh registry.
    pub const FIRST: TicketId = TicketId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer record.
///
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Build a customer from raw input, trimming every field.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` naming the first empty field.
    pub fn new(
        id: impl AsRef<str>,
        name: impl AsRef<str>,
        email: impl AsRef<str>,
    ) -> Result<Self, DeskError> {
        Ok(Self {
            id: CustomerId::new(id)?,
            name: required(name.as_ref(), Field::CustomerName)?,
            email: required(email.as_ref(), Field::CustomerEmail)?,
        })
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.id, self.name, self.email)
    }
}

/// A support ticket waiting in (or served from) the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub customer_id: CustomerId,
    pub subject: String,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} | {} | {}", self.id, self.customer_id, self.subject)
    }
}
