//! Command interpreter.
//!
//! Maps parsed commands to operations on the address book and renders a
//! single-line, human-readable reply for each input line. Every failure
//! (malformed input, a bad phone number, a missing contact) comes back as
//! a reply; nothing escapes the interpreter boundary, so no user input can
//! end the session except an explicit exit command.

pub mod command;

pub use command::Command;

use crate::book::AddressBook;
use crate::error::DirectoryError;
use crate::models::ContactRecord;
use crate::observability::SessionMetrics;
use tracing::debug;

/// Fixed greeting, printed at startup and in reply to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Fixed farewell, printed on exit.
pub const FAREWELL: &str = "Good bye!";

/// Whether the session continues after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One reply to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    pub state: SessionState,
}

impl Response {
    fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state: SessionState::Running,
        }
    }

    fn farewell() -> Self {
        Self {
            message: FAREWELL.to_string(),
            state: SessionState::Terminated,
        }
    }
}

/// The command interpreter.
///
/// Owns the address book it operates on; construct one per session.
#[derive(Debug, Default)]
pub struct Interpreter {
    book: AddressBook,
    metrics: SessionMetrics,
}

impl Interpreter {
    /// Create an interpreter over the given address book.
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            metrics: SessionMetrics::new(),
        }
    }

    /// The underlying address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Counters for the lines this interpreter has processed.
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let parsed = Command::parse(line);
        self.metrics.track_line(&parsed);
        match parsed {
            Ok(command) => {
                debug!(?command, "dispatching command");
                self.execute(command)
            }
            Err(e) => {
                debug!(error = %e, input = line.trim(), "rejected input line");
                Response::reply(e.to_string())
            }
        }
    }

    /// Execute an already-parsed command.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Hello => Response::reply(GREETING),
            Command::Exit => Response::farewell(),
            Command::Add { name, phone } => self.add(&name, &phone),
            Command::Change { name, phone } => self.change(&name, &phone),
            Command::Phone { name } => self.phone(&name),
            Command::Remove { name, phone } => self.remove(&name, &phone),
            Command::Delete { name } => self.delete(&name),
            Command::Find { name } => self.find(&name),
            Command::ShowAll => self.show_all(),
        }
    }

    /// `add`: create the record if absent, then attach the phone.
    ///
    /// The phone is validated before any record is created, so a rejected
    /// value leaves the book untouched.
    fn add(&mut self, name: &str, phone: &str) -> Response {
        match self.book.find_mut(name) {
            Some(record) => match record.add_phone(phone) {
                Ok(()) => Response::reply(format!("Added phone {phone} to contact {name}")),
                Err(e) => Response::reply(e.to_string()),
            },
            None => {
                let mut record = ContactRecord::new(name);
                if let Err(e) = record.add_phone(phone) {
                    return Response::reply(e.to_string());
                }
                self.book.add_record(record);
                Response::reply(format!("Added contact: {name}, {phone}"))
            }
        }
    }

    /// `change`: replace the record's first phone with the new value.
    fn change(&mut self, name: &str, phone: &str) -> Response {
        let Some(record) = self.book.find_mut(name) else {
            return Self::not_found(name);
        };
        let Some(first) = record.first_phone().map(|p| p.as_str().to_string()) else {
            return Response::reply(format!("Contact {name} has no phone numbers"));
        };
        match record.edit_phone(&first, phone) {
            Ok(()) => Response::reply(format!("Changed phone for {name} to {phone}")),
            Err(e) => Response::reply(e.to_string()),
        }
    }

    /// `phone`: show the record's first phone.
    fn phone(&self, name: &str) -> Response {
        match self.book.find(name) {
            Some(record) => match record.first_phone() {
                Some(phone) => Response::reply(format!("Phone number for {name}: {phone}")),
                None => Response::reply(format!("Contact {name} has no phone numbers")),
            },
            None => Self::not_found(name),
        }
    }

    /// `remove`: detach the first matching phone from the record.
    fn remove(&mut self, name: &str, phone: &str) -> Response {
        match self.book.find_mut(name) {
            Some(record) => {
                if record.remove_phone(phone) {
                    Response::reply(format!("Removed phone {phone} from contact {name}"))
                } else {
                    Response::reply(format!("Phone number {phone} not found in the record"))
                }
            }
            None => Self::not_found(name),
        }
    }

    /// `delete`: remove the contact from the book.
    fn delete(&mut self, name: &str) -> Response {
        match self.book.delete(name) {
            Ok(()) => Response::reply(format!("Deleted contact: {name}")),
            Err(e) => Response::reply(e.to_string()),
        }
    }

    /// `find`: exact lookup first, then case-insensitive substring search.
    fn find(&self, name: &str) -> Response {
        if let Some(record) = self.book.find(name) {
            return Response::reply(record.to_string());
        }
        let matches = self.book.search(name);
        if matches.is_empty() {
            return Self::not_found(name);
        }
        let rendered = matches
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Response::reply(rendered)
    }

    /// `show all`: render every record, one per line, in name order.
    fn show_all(&self) -> Response {
        if self.book.is_empty() {
            return Response::reply("No contacts found");
        }
        let rendered = self
            .book
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Response::reply(rendered)
    }

    fn not_found(name: &str) -> Response {
        Response::reply(DirectoryError::ContactNotFound(name.to_string()).to_string())
    }
}
