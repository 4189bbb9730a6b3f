//! Line input from the user.
//!
//! Two readers implement [`LineReader`]:
//! - [`TerminalReader`]: a rustyline editor with tab completion, used when
//!   stdin is a terminal. Prompts are drawn on the terminal, never stdout.
//! - [`PipedReader`]: plain buffered reads with no prompt text, used when
//!   input is piped or redirected.
//!
//! Both treat end-of-input as an empty line and print a newline to the error
//! stream so the next message starts on a fresh line.

mod piped;
mod terminal;


pub use piped::PipedReader;
pub use terminal::TerminalReader;

use crate::error::Result;
use std::io::{BufReader, IsTerminal};

/// Reads a single line of input.
pub trait LineReader {
    /// Replace the tab-completion candidates for the next read.
    ///
    /// Candidates never carry over: each call discards the previous list.
    fn set_completions(&mut self, completions: Vec<String>);

    /// Read one line without its trailing newline.
    ///
    /// Returns an empty string at end-of-input. Fails with
    /// [`IbsubError::Interrupted`](crate::error::IbsubError::Interrupted) when
    /// the user presses Ctrl-C.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl<L: LineReader + ?Sized> LineReader for Box<L> {
    fn set_completions(&mut self, completions: Vec<String>) {
        (**self).set_completions(completions)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }
}

/// Open the reader appropriate for the process's stdin.
pub fn open_stdin_reader() -> Result<Box<dyn LineReader>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        Ok(Box::new(TerminalReader::new()?))
    } else {
        Ok(Box::new(PipedReader::new(
            BufReader::new(stdin),
            std::io::stderr(),
        )))
    }
}

/// Candidates starting with `word`, compared case-insensitively, in list order.
pub fn matching_candidates(candidates: &[String], word: &str) -> Vec<String> {
    let word = word.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&word))
        .cloned()
        .collect()
}

/// Byte offset where the word ending at `pos` begins.
pub(crate) fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .rfind(char::is_whitespace)
        .map(|idx| idx + line[idx..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0)
}
