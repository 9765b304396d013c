//! Interactive read-eval-print loop
//!
//! Reads one line at a time, hands it to the dispatcher and prints the reply
//! until a command asks to exit.

use std::io::{BufRead, Write};

use crate::commands::Dispatcher;
use crate::error::ContactResult;
use crate::models::AddressBook;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Split a line into a lower-cased command token and its arguments
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(String::from).collect();
    Some((command, args))
}

/// Run the loop over `input` until an exit command succeeds
///
/// End of input is handled like `exit`, so the book is still saved.
pub fn run<R, W>(
    mut input: R,
    output: &mut W,
    book: &mut AddressBook,
    dispatcher: &Dispatcher<'_>,
) -> ContactResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            tracing::debug!("end of input");
            let outcome = dispatcher.dispatch(book, "exit", &[]);
            writeln!(output, "{}", outcome.message)?;
            // Nothing more can be read, so stop even if saving failed
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        let outcome = dispatcher.dispatch(book, &command, &args);
        writeln!(output, "{}", outcome.message)?;
        if outcome.exit {
            return Ok(());
        }
    }
}
