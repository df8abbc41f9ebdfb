//! cli::menu
//!
//! The interactive menu loop.
//!
//! # Design
//!
//! The loop reads a choice, runs one desk operation to completion, prints
//! its status, and repeats. Domain errors are printed and the loop carries
//! on; only I/O failures end it with an error. Choosing `0` or closing
//! input ends it normally.
//!
//! Preconditions that decide whether the next prompt is worth asking
//! (empty id, duplicate id, unknown customer) are checked as soon as the
//! answer is read, so the operator is not asked for a name or subject that
//! would be thrown away.

use std::io::{BufRead, Write};

use crate::core::types::CustomerId;
use crate::core::{DeskError, Field};
use crate::engine::Desk;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{PromptError, Prompter};

const MENU: &str = "\n=== Support Desk ===\n\
[1] Add customer\n\
[2] Find customer\n\
[3] Create ticket\n\
[4] Serve next ticket\n\
[5] List customers\n\
[6] List tickets\n\
[7] Undo last action\n\
[8] Show undo history\n\
[0] Exit";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    FindCustomer,
    CreateTicket,
    ServeNext,
    ListCustomers,
    ListTickets,
    Undo,
    History,
    Exit,
}

impl MenuChoice {
    /// Parse a typed choice. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::AddCustomer,
            "2" => MenuChoice::FindCustomer,
            "3" => MenuChoice::CreateTicket,
            "4" => MenuChoice::ServeNext,
            "5" => MenuChoice::ListCustomers,
            "6" => MenuChoice::ListTickets,
            "7" => MenuChoice::Undo,
            "8" => MenuChoice::History,
            "0" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Menu settings.
#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    /// Render list views as JSON.
    pub json: bool,
    pub verbosity: Verbosity,
}

/// Run the menu until exit or end of input.
pub fn run<R: BufRead, W: Write>(
    desk: &mut Desk,
    prompter: &mut Prompter<R, W>,
    options: MenuOptions,
) -> Result<(), PromptError> {
    loop {
        prompter.chrome(MENU)?;
        let line = match prompter.input("Choose: ") {
            Ok(line) => line,
            Err(PromptError::Cancelled) => break,
            Err(e) => return Err(e),
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            prompter.say("Invalid option.")?;
            continue;
        };
        output::debug(format!("menu: {:?}", choice), options.verbosity);

        let result = match choice {
            MenuChoice::Exit => break,
            MenuChoice::AddCustomer => add_customer(desk, prompter),
            MenuChoice::FindCustomer => find_customer(desk, prompter),
            MenuChoice::CreateTicket => create_ticket(desk, prompter),
            MenuChoice::ServeNext => serve_next(desk, prompter),
            MenuChoice::ListCustomers => list_customers(desk, prompter, options.json),
            MenuChoice::ListTickets => list_tickets(desk, prompter, options.json),
            MenuChoice::Undo => undo(desk, prompter),
            MenuChoice::History => history(desk, prompter, options.json),
        };

        match result {
            Ok(()) => {}
            // Input ran out in the middle of an operation.
            Err(PromptError::Cancelled) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Print a domain error as a status line.
fn report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    err: DeskError,
) -> Result<(), PromptError> {
    prompter.say(err)
}

fn add_customer<R: BufRead, W: Write>(
    desk: &mut Desk,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let id = prompter.input("Enter customer ID: ")?;
    let id = match CustomerId::new(&id) {
        Ok(id) => id,
        Err(e) => return report(prompter, e),
    };
    if desk.find_customer(id.as_str()).is_some() {
        return report(prompter, DeskError::DuplicateId(id.to_string()));
    }

    let name = prompter.input("Enter customer name: ")?;
    if name.trim().is_empty() {
        return report(prompter, DeskError::InvalidInput(Field::CustomerName));
    }
    let email = prompter.input("Enter customer email: ")?;

    match desk.add_customer(id.as_str(), &name, &email) {
        Ok(_) => prompter.say("Customer Added"),
        Err(e) => report(prompter, e),
    }
}

fn find_customer<R: BufRead, W: Write>(
    desk: &Desk,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let id = prompter.input("Enter customer ID to find: ")?;
    let id = match CustomerId::new(&id) {
        Ok(id) => id,
        Err(e) => return report(prompter, e),
    };

    match desk.find_customer(id.as_str()) {
        Some(customer) => prompter.say(format!("Customer found: {}", customer)),
        None => report(prompter, DeskError::CustomerNotFound(id.to_string())),
    }
}

fn create_ticket<R: BufRead, W: Write>(
    desk: &mut Desk,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let id = prompter.input("Enter customer ID: ")?;
    let id = match CustomerId::new(&id) {
        Ok(id) => id,
        Err(e) => return report(prompter, e),
    };
    if desk.find_customer(id.as_str()).is_none() {
        return report(prompter, DeskError::CustomerNotFound(id.to_string()));
    }

    let subject = prompter.input("Enter subject: ")?;
    match desk.create_ticket(id.as_str(), &subject) {
        Ok(ticket) => prompter.say(format!("Ticket Created: {}", ticket)),
        Err(e) => report(prompter, e),
    }
}

fn serve_next<R: BufRead, W: Write>(
    desk: &mut Desk,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    match desk.serve_next() {
        Ok(ticket) => prompter.say(format!("Serving Ticket: {}", ticket)),
        Err(e) => report(prompter, e),
    }
}

fn list_customers<R: BufRead, W: Write>(
    desk: &Desk,
    prompter: &mut Prompter<R, W>,
    json: bool,
) -> Result<(), PromptError> {
    let customers = desk.list_customers();
    let text = output::render_list("-- Customers --", "No customers.", &customers, json)
        .map_err(|e| PromptError::IoError(e.into()))?;
    prompter.say(text)
}

fn list_tickets<R: BufRead, W: Write>(
    desk: &Desk,
    prompter: &mut Prompter<R, W>,
    json: bool,
) -> Result<(), PromptError> {
    let tickets = desk.list_tickets();
    let text = output::render_list(
        "-- Tickets (front to back) --",
        "No tickets.",
        &tickets,
        json,
    )
    .map_err(|e| PromptError::IoError(e.into()))?;
    prompter.say(text)
}

fn undo<R: BufRead, W: Write>(
    desk: &mut Desk,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    match desk.undo_last() {
        Ok(outcome) => prompter.say(outcome),
        Err(e) => report(prompter, e),
    }
}

fn history<R: BufRead, W: Write>(
    desk: &Desk,
    prompter: &mut Prompter<R, W>,
    json: bool,
) -> Result<(), PromptError> {
    let actions = desk.history();
    let text = output::render_list(
        "-- Undo history (most recent first) --",
        "Nothing to undo.",
        &actions,
        json,
    )
    .map_err(|e| PromptError::IoError(e.into()))?;
    prompter.say(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::default_seed_customers;

    fn session(script: &str) -> (Desk, String) {
        let mut desk = Desk::new();
        desk.seed(&default_seed_customers()).unwrap();
        let mut prompter = Prompter::new(script.as_bytes(), Vec::new(), false);
        let options = MenuOptions {
            json: false,
            verbosity: Verbosity::Quiet,
        };
        run(&mut desk, &mut prompter, options).unwrap();
        let out = String::from_utf8(prompter.into_output()).unwrap();
        (desk, out)
    }

    #[test]
    fn parse_choices() {
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Undo));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn invalid_option_keeps_running() {
        let (_, out) = session("x\n5\n0\n");
        assert!(out.starts_with("Invalid option.\n-- Customers --\n"));
    }

    #[test]
    fn end_of_input_exits() {
        let (_, out) = session("4\n");
        assert_eq!(out, "No tickets to serve.\n");
    }

    #[test]
    fn add_customer_flow() {
        let (desk, out) = session("1\nC004\n  Dana Reyes \ndana@example.com\n0\n");
        assert_eq!(out, "Customer Added\n");
        assert_eq!(desk.find_customer("C004").unwrap().name, "Dana Reyes");
    }

    #[test]
    fn duplicate_id_stops_before_name_prompt() {
        // "Dup" is read as the next menu choice, not as a name.
        let (_, out) = session("1\nC001\nDup\n0\n");
        assert_eq!(
            out,
            "Customer with this ID already exists.\nInvalid option.\n"
        );
    }

    #[test]
    fn empty_fields_reported() {
        let (_, out) = session("1\n \n1\nC005\n\n1\nC005\nEve\n  \n0\n");
        assert_eq!(
            out,
            "Customer ID cannot be empty.\n\
             Customer name cannot be empty.\n\
             Customer email cannot be empty.\n"
        );
    }

    #[test]
    fn find_customer_flow() {
        let (_, out) = session("2\n C002 \n2\nC404\n0\n");
        assert_eq!(
            out,
            "Customer found: C002 | Ben Parker | ben@example.com\nCustomer not found.\n"
        );
    }

    #[test]
    fn ticket_lifecycle_with_undo() {
        let (desk, out) = session("3\nC001\nX\n4\n7\n6\n7\n6\n7\n0\n");
        assert_eq!(
            out,
            "Ticket Created: #1 | C001 | X\n\
             Serving Ticket: #1 | C001 | X\n\
             Undo: restored served ticket #: 1\n\
             -- Tickets (front to back) --\n#1 | C001 | X\n\
             Undo: removed ticket #: 1\n\
             -- Tickets (front to back) --\nNo tickets.\n\
             Nothing to undo.\n"
        );
        assert_eq!(desk.next_ticket_id().get(), 1);
    }

    #[test]
    fn unknown_customer_skips_subject_prompt() {
        let (_, out) = session("3\nC404\n0\n");
        assert_eq!(out, "Customer not found.\n");
    }

    #[test]
    fn empty_subject_reported() {
        let (desk, out) = session("3\nC001\n   \n0\n");
        assert_eq!(out, "Subject cannot be empty.\n");
        assert!(desk.history().is_empty());
    }

    #[test]
    fn history_view() {
        let (_, out) = session("8\n3\nC002\nHelp\n4\n8\n0\n");
        assert_eq!(
            out,
            "-- Undo history (most recent first) --\nNothing to undo.\n\
             Ticket Created: #1 | C002 | Help\n\
             Serving Ticket: #1 | C002 | Help\n\
             -- Undo history (most recent first) --\n\
             served ticket #1\n\
             created ticket #1\n"
        );
    }

    #[test]
    fn json_lists() {
        let mut desk = Desk::new();
        desk.seed(&default_seed_customers()[..1]).unwrap();
        let mut prompter = Prompter::new("5\n6\n".as_bytes(), Vec::new(), false);
        let options = MenuOptions {
            json: true,
            verbosity: Verbosity::Quiet,
        };
        run(&mut desk, &mut prompter, options).unwrap();
        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(
            out,
            "[{\"id\":\"C001\",\"name\":\"Ava Martin\",\"email\":\"ava@example.com\"}]\n[]\n"
        );
    }

    #[test]
    fn prompts_shown_when_not_quiet() {
        let mut desk = Desk::new();
        let mut prompter = Prompter::new("0\n".as_bytes(), Vec::new(), true);
        let options = MenuOptions {
            json: false,
            verbosity: Verbosity::Normal,
        };
        run(&mut desk, &mut prompter, options).unwrap();
        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert!(out.contains("=== Support Desk ==="));
        assert!(out.contains("[7] Undo last action"));
        assert!(out.ends_with("Choose: "));
    }
}
