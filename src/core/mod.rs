//! core
//!
//! Core domain types, state, and undo for the support desk.
//!
//! # Modules
//!
//! - [`types`] - Strong types: CustomerId, TicketId, Customer, Ticket
//! - [`registry`] - Customer table and FIFO ticket queue
//! - [`action_log`] - Reversible action stack and undo
//! - [`config`] - Configuration schema and loading
//! - [`error`] - Domain errors
//!
//! # Design Principles
//!
//! - Required fields are validated at construction
//! - Every mutation that can be undone is recorded as a closed [`action_log::Action`]
//! - No global state: everything is owned by one registry and one log

pub mod action_log;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use error::{DeskError, Field, Result};
