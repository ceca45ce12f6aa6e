//! Contact Book - an interactive, in-memory contact directory.
//!
//! A line-oriented command loop over a validated contact model: create
//! named contacts, attach ten-digit phone numbers, edit or remove them,
//! and list everything. All state lives in memory; nothing is persisted.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers)
//! - **models**: the contact record (one name, ordered phones)
//! - **book**: the in-memory directory mapping names to records
//! - **interpreter**: command parsing and dispatch, one reply per line
//! - **session**: the blocking read-eval-print loop over `BufRead`/`Write`
//! - **observability**: session counters logged when the loop ends
//! - **config**: environment-based configuration
//! - **error**: custom error types for precise error handling

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod interpreter;
pub mod models;
pub mod observability;
pub mod session;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, DirectoryError, RecordError};
pub use interpreter::{Command, Interpreter, Response, SessionState, FAREWELL, GREETING};
pub use models::ContactRecord;
pub use observability::SessionMetrics;
pub use session::Session;
