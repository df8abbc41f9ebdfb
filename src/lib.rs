//! SupportDesk - a single-user support ticket tracker with one-step undo
//!
//! SupportDesk keeps a small in-memory table of customers and a
//! first-in-first-out queue of support tickets, driven from a textual menu.
//! The most recent state-changing action can always be undone.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface and the menu loop
//! - [`engine`] - The [`engine::Desk`] controller and session setup
//! - [`core`] - Domain types, registry, action log, configuration
//! - [`ui`] - Prompts, output formatting, diagnostics
//!
//! # Correctness Invariants
//!
//! 1. Tickets are served in creation order unless undo intervenes
//! 2. Only successful operations are recorded for undo
//! 3. Undo is single-step and LIFO; an undone entry is gone for good
//! 4. The ticket counter rewinds only when the undone ticket was the last issued

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
