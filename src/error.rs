//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone number targeted by an edit is not on the record
    #[error("Phone number {0} not found in the record")]
    PhoneNotFound(String),

    /// A phone value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when operating on the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No record exists for the given contact name
    #[error("Contact {0} not found")]
    ContactNotFound(String),
}

/// Errors produced while parsing an input line into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Recognized keyword with the wrong number of arguments
    #[error("Invalid command format")]
    Malformed,

    /// Input matched no known command
    #[error("Invalid command. Try again.")]
    Unknown,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
