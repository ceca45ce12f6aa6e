//! Command grammar for the interactive loop.
//!
//! One command per line, whitespace-tokenized. `hello`, `show all`, and
//! the exit words match the whole trimmed line case-insensitively; the
//! remaining commands dispatch on a case-folded keyword PREFIX, so
//! `ADD`, `add`, and even `added` all reach the `add` handler and only
//! the argument count decides whether the line is well-formed.

use crate::error::{CommandError, CommandResult};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`: greet the user
    Hello,
    /// `add <name> <phone>`: create the contact if absent, attach the phone
    Add { name: String, phone: String },
    /// `change <name> <phone>`: replace the contact's first phone
    Change { name: String, phone: String },
    /// `phone <name>`: show the contact's first phone
    Phone { name: String },
    /// `remove <name> <phone>`: detach one phone from the contact
    Remove { name: String, phone: String },
    /// `delete <name>`: remove the contact entirely
    Delete { name: String },
    /// `find <name>`: exact lookup, falling back to substring search
    Find { name: String },
    /// `show all`: list every contact
    ShowAll,
    /// `good bye` | `close` | `exit`: end the session
    Exit,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// Pure function: all failures come back as [`CommandError`] values.
    /// Arguments keep their original case; only the keyword is folded.
    ///
    /// # Errors
    ///
    /// `CommandError::Malformed` when a recognized keyword has the wrong
    /// number of arguments, `CommandError::Unknown` for everything else
    /// (including an empty line).
    pub fn parse(line: &str) -> CommandResult<Command> {
        let trimmed = line.trim();

        match trimmed.to_lowercase().as_str() {
            "good bye" | "close" | "exit" => return Ok(Command::Exit),
            "hello" => return Ok(Command::Hello),
            "show all" => return Ok(Command::ShowAll),
            _ => {}
        }

        let mut tokens = trimmed.split_whitespace();
        let keyword = match tokens.next() {
            Some(word) => word.to_lowercase(),
            None => return Err(CommandError::Unknown),
        };
        let args: Vec<&str> = tokens.collect();

        if keyword.starts_with("add") {
            let (name, phone) = two_args(&args)?;
            Ok(Command::Add { name, phone })
        } else if keyword.starts_with("change") {
            let (name, phone) = two_args(&args)?;
            Ok(Command::Change { name, phone })
        } else if keyword.starts_with("phone") {
            Ok(Command::Phone { name: one_arg(&args)? })
        } else if keyword.starts_with("remove") {
            let (name, phone) = two_args(&args)?;
            Ok(Command::Remove { name, phone })
        } else if keyword.starts_with("delete") {
            Ok(Command::Delete { name: one_arg(&args)? })
        } else if keyword.starts_with("find") {
            Ok(Command::Find { name: one_arg(&args)? })
        } else if keyword.starts_with("show") {
            match args.as_slice() {
                [word] if word.eq_ignore_ascii_case("all") => Ok(Command::ShowAll),
                _ => Err(CommandError::Malformed),
            }
        } else {
            Err(CommandError::Unknown)
        }
    }
}

fn one_arg(args: &[&str]) -> CommandResult<String> {
    match args {
        [name] => Ok((*name).to_string()),
        _ => Err(CommandError::Malformed),
    }
}

fn two_args(args: &[&str]) -> CommandResult<(String, String)> {
    match args {
        [name, phone] => Ok(((*name).to_string(), (*phone).to_string())),
        _ => Err(CommandError::Malformed),
    }
}
