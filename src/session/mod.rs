//! The interactive session loop.
//!
//! Drives an [`Interpreter`] over generic reader/writer handles: print the
//! banner, then read one line, hand it to the interpreter, print the reply,
//! repeat. The loop is fully synchronous: one line is processed to
//! completion before the next read. End-of-stream is treated exactly like
//! an exit command.

use crate::interpreter::{Interpreter, SessionState, FAREWELL, GREETING};
use std::io::{BufRead, Write};
use tracing::info;

/// One interactive session over a line source and a reply sink.
///
/// `main` wires this to locked stdin/stdout; tests drive it with in-memory
/// buffers.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    interpreter: Interpreter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session.
    pub fn new(reader: R, writer: W, interpreter: Interpreter) -> Self {
        Self {
            reader,
            writer,
            interpreter,
        }
    }

    /// Run the read-eval-print loop until an exit command or end-of-stream.
    ///
    /// # Errors
    ///
    /// Only I/O errors from the underlying reader or writer; user input can
    /// never fail the loop.
    pub fn run(mut self) -> std::io::Result<Interpreter> {
        writeln!(self.writer, "{GREETING}")?;
        self.writer.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            let bytes_read = self.reader.read_line(&mut line)?;
            if bytes_read == 0 {
                // end of stream: same terminal transition as "exit"
                writeln!(self.writer, "{FAREWELL}")?;
                self.writer.flush()?;
                break;
            }

            let response = self.interpreter.handle_line(&line);
            writeln!(self.writer, "{}", response.message)?;
            self.writer.flush()?;

            if response.state == SessionState::Terminated {
                break;
            }
        }

        info!(summary = %self.interpreter.metrics().summary(), "session ended");
        Ok(self.interpreter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (String, Interpreter) {
        let reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let session = Session::new(reader, &mut output, Interpreter::default());
        let interpreter = session.run().expect("in-memory I/O cannot fail");
        (String::from_utf8(output).unwrap(), interpreter)
    }

    #[test]
    fn test_banner_and_farewell() {
        let (output, _) = run_session("exit\n");
        assert_eq!(output, "How can I help you?\nGood bye!\n");
    }

    #[test]
    fn test_eof_is_treated_as_exit() {
        let (output, _) = run_session("hello\n");
        assert!(output.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_loop_stops_at_exit_and_ignores_rest() {
        let (output, interpreter) = run_session("close\nadd John 1234567890\n");
        assert_eq!(output, "How can I help you?\nGood bye!\n");
        assert!(interpreter.book().is_empty());
    }

    #[test]
    fn test_replies_are_line_per_command() {
        let (output, _) = run_session("hello\nfoobar\ngood bye\n");
        assert_eq!(
            output,
            "How can I help you?\n\
             How can I help you?\n\
             Invalid command. Try again.\n\
             Good bye!\n"
        );
    }

    #[test]
    fn test_session_metrics_are_reported() {
        let (_, interpreter) = run_session("hello\nfoobar\nexit\n");
        assert_eq!(interpreter.metrics().lines_total(), 3);
        assert_eq!(interpreter.metrics().commands_total(), 2);
        assert_eq!(interpreter.metrics().rejected_total(), 1);
    }
}
