//! Prompt-less line reading for piped or redirected input.

use super::LineReader;
use crate::error::{IbsubError, Result};
use std::io::{BufRead, Write};

/// Reads lines from any buffered source without echoing prompts.
///
/// Completions are accepted and discarded since there is nobody to press Tab.
///
/// End of input reads as an empty line on every call. A required prompt
/// therefore repeats its "Please enter a value." message until the process is
/// stopped, so piped sessions must supply an answer for every required step.
pub struct PipedReader<R: BufRead, W: Write> {
    input: R,
    err: W,
}

impl<R: BufRead, W: Write> PipedReader<R, W> {
    pub fn new(input: R, err: W) -> Self {
        Self { input, err }
    }

    /// Consume the reader, returning the error stream (used by tests).
    #[cfg(test)]
    pub(crate) fn into_err(self) -> W {
        self.err
    }
}

impl<R: BufRead, W: Write> LineReader for PipedReader<R, W> {
    fn set_completions(&mut self, _completions: Vec<String>) {}

    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| IbsubError::Terminal(format!("failed to read input: {}", e)))?;

        if read == 0 {
            // The user never pressed Enter, so finish the line for them.
            let _ = writeln!(self.err);
            return Ok(String::new());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
