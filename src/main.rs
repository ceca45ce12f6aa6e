//! Contact Book - Main entry point
//!
//! Wires the in-memory address book, the command interpreter, and the
//! interactive session over stdin/stdout.

use anyhow::Result;
use contact_book::{AddressBook, Config, Interpreter, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr only: stdout is the reply channel
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact book session");

    let interpreter = Interpreter::new(AddressBook::new());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = Session::new(stdin.lock(), stdout.lock(), interpreter);
    session.run()?;

    info!("Contact book session complete");
    Ok(())
}
