//! # Input Module
//!
//! Line input and command interpretation for player interactions.

pub mod commands;

pub use commands::*;

use crate::AdventureResult;
use std::io::{BufRead, StdinLock};

/// Reads player input one line at a time.
///
/// Reading blocks until a full line is available; it is the only point where
/// the game waits.
pub struct InputHandler<R> {
    reader: R,
}

impl InputHandler<StdinLock<'static>> {
    /// Creates an input handler reading from standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> InputHandler<R> {
    /// Creates an input handler over any buffered reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use wayfarer::InputHandler;
    ///
    /// let mut input = InputHandler::new(Cursor::new("look\nquit\n"));
    /// assert_eq!(input.read_line().unwrap().as_deref(), Some("look"));
    /// assert_eq!(input.read_line().unwrap().as_deref(), Some("quit"));
    /// assert_eq!(input.read_line().unwrap(), None);
    /// ```
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the next line without its line ending, or `None` at end of
    /// input.
    pub fn read_line(&mut self) -> AdventureResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strips_crlf() {
        let mut input = InputHandler::new(Cursor::new("get lamp\r\n"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("get lamp"));
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut input = InputHandler::new(Cursor::new("\nlook"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("look"));
        assert_eq!(input.read_line().unwrap(), None);
    }
}
