//! core::registry
//!
//! In-memory customer table and ticket queue.
//!
//! # Invariants
//!
//! - Customer ids are unique; customers list in insertion order
//! - Tickets are served front to back in creation order, except where undo
//!   restores a served ticket at the head or removes one from the middle
//! - `next_ticket_id` is only rewound by undo, and only through
//!   [`Registry::rewind_ticket_counter`]
//!
//! # Example
//!
//! ```
//! use supportdesk::core::registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_customer("C001", "Ava Martin", "ava@example.com").unwrap();
//!
//! let ticket = registry.create_ticket("C001", "Cannot log in").unwrap();
//! assert_eq!(ticket.id.get(), 1);
//! assert_eq!(registry.serve_next(), Some(ticket));
//! assert_eq!(registry.serve_next(), None);
//! ```

use std::collections::{HashMap, VecDeque};

use super::types::{required, Customer, CustomerId, Ticket, TicketId};
use super::{DeskError, Field, Result};

/// Owner of all customer and ticket state.
#[derive(Debug, Clone)]
pub struct Registry {
    customers: HashMap<CustomerId, Customer>,
    /// Customer ids in insertion order.
    order: Vec<CustomerId>,
    tickets: VecDeque<Ticket>,
    next_ticket_id: TicketId,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            customers: HashMap::new(),
            order: Vec::new(),
            tickets: VecDeque::new(),
            next_ticket_id: TicketId::FIRST,
        }
    }
}

impl Registry {
    /// Create an empty registry. The first ticket will be `#1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// - `DeskError::InvalidInput` if any field is empty after trimming
    /// - `DeskError::DuplicateId` if the id is already registered
    pub fn add_customer(
        &mut self,
        id: impl AsRef<str>,
        name: impl AsRef<str>,
        email: impl AsRef<str>,
    ) -> Result<Customer> {
        let customer = Customer::new(id, name, email)?;
        if self.customers.contains_key(&customer.id) {
            return Err(DeskError::DuplicateId(customer.id.to_string()));
        }

        self.order.push(customer.id.clone());
        self.customers.insert(customer.id.clone(), customer.clone());
        Ok(customer)
    }

    /// Look up a customer by id. Surrounding whitespace is ignored.
    pub fn find_customer(&self, id: &str) -> Option<&Customer> {
        self.customers.get(id.trim())
    }

    /// Whether a customer id is registered.
    pub fn contains_customer(&self, id: &str) -> bool {
        self.find_customer(id).is_some()
    }

    /// Open a ticket for an existing customer and append it to the queue.
    ///
    /// # Errors
    ///
    /// - `DeskError::InvalidInput` if the customer id or subject is empty
    /// - `DeskError::CustomerNotFound` if the customer is not registered
    pub fn create_ticket(
        &mut self,
        customer_id: impl AsRef<str>,
        subject: impl AsRef<str>,
    ) -> Result<Ticket> {
        let customer_id = CustomerId::new(customer_id)?;
        if !self.customers.contains_key(&customer_id) {
            return Err(DeskError::CustomerNotFound(customer_id.to_string()));
        }
        let subject = required(subject.as_ref(), Field::Subject)?;

        let ticket = Ticket {
            id: self.next_ticket_id,
            customer_id,
            subject,
        };
        self.next_ticket_id = self.next_ticket_id.next();
        self.tickets.push_back(ticket.clone());
        Ok(ticket)
    }

    /// Remove and return the ticket at the head of the queue.
    pub fn serve_next(&mut self) -> Option<Ticket> {
        self.tickets.pop_front()
    }

    /// Remove a customer. Returns false if the id was not registered.
    pub fn remove_customer(&mut self, id: &CustomerId) -> bool {
        if self.customers.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }

    /// Remove the first queued ticket with the given id, keeping the
    /// relative order of the rest. Returns false if no ticket matched.
    pub fn remove_ticket_by_id(&mut self, id: TicketId) -> bool {
        match self.tickets.iter().position(|t| t.id == id) {
            Some(index) => self.tickets.remove(index).is_some(),
            None => false,
        }
    }

    /// Put a served ticket back at the head of the queue.
    pub fn restore_ticket_at_head(&mut self, ticket: Ticket) {
        self.tickets.push_front(ticket);
    }

    /// Customers in insertion order.
    pub fn list_customers(&self) -> Vec<&Customer> {
        self.order
            .iter()
            .filter_map(|id| self.customers.get(id))
            .collect()
    }

    /// Queued tickets, front to back.
    pub fn list_tickets(&self) -> Vec<&Ticket> {
        self.tickets.iter().collect()
    }

    /// The id the next created ticket will receive.
    pub fn next_ticket_id(&self) -> TicketId {
        self.next_ticket_id
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn queue_len(&self) -> usize {
        self.tickets.len()
    }

    /// Roll the counter back so `id` is issued again.
    pub(crate) fn rewind_ticket_counter(&mut self, id: TicketId) {
        self.next_ticket_id = id;
    }
}
