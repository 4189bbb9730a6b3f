//! The prompt primitive shared by every question ibsub asks.
//!
//! A [`PromptRequest`] describes one question; a [`Prompt`] implementation
//! asks it and loops until the answer satisfies the request's rules:
//!
//! - Empty input returns the default when there is one (unvalidated), returns
//!   `None` when the question is optional, and otherwise re-asks.
//! - Non-empty input is returned once the validator (if any) accepts it.

use crate::error::{IbsubError, Result};
use crate::input::LineReader;
use std::fmt;
use std::io::Write;


/// Printed when a required question is answered with an empty line.
pub const MISSING_VALUE_MESSAGE: &str = "Please enter a value.";

/// Printed when the validator rejects the answer.
pub const INVALID_FORMAT_MESSAGE: &str = "Please enter the correct format.";

/// Everything needed to ask one question.
pub struct PromptRequest<'a> {
    pub message: &'a str,
    pub required: bool,
    pub format_hint: Option<&'a str>,
    pub validator: Option<Box<dyn Fn(&str) -> bool + 'a>>,
    pub default: Option<String>,
    pub completions: Vec<String>,
}

impl<'a> PromptRequest<'a> {
    /// An optional question with no hint, validator, default or completions.
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            required: false,
            format_hint: None,
            validator: None,
            default: None,
            completions: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn format_hint(mut self, hint: &'a str) -> Self {
        self.format_hint = Some(hint);
        self
    }

    pub fn validator(mut self, validator: impl Fn(&str) -> bool + 'a) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn default_value(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }

    pub fn completions(mut self, completions: Vec<String>) -> Self {
        self.completions = completions;
        self
    }

    /// The text shown before the cursor, e.g. `Queue [regular]: `.
    pub fn display_text(&self) -> String {
        let mut text = self.message.to_string();
        if let Some(hint) = self.format_hint {
            text.push_str(&format!(" ({})", hint));
        }
        if let Some(default) = &self.default {
            text.push_str(&format!(" [{}]", default));
        }
        text.push_str(": ");
        text
    }

    fn accepts(&self, text: &str) -> bool {
        self.validator.as_ref().is_none_or(|validate| validate(text))
    }
}

impl fmt::Debug for PromptRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptRequest")
            .field("message", &self.message)
            .field("required", &self.required)
            .field("format_hint", &self.format_hint)
            .field("validator", &self.validator.is_some())
            .field("default", &self.default)
            .field("completions", &self.completions)
            .finish()
    }
}

/// Asks a question and returns the accepted answer, or `None` when skipped.
pub trait Prompt {
    fn ask(&mut self, request: PromptRequest<'_>) -> Result<Option<String>>;
}

/// The interactive [`Prompt`]: reads through a [`LineReader`] and reports
/// problems on an error stream.
pub struct Prompter<L: LineReader, W: Write> {
    reader: L,
    err: W,
}

impl<L: LineReader, W: Write> Prompter<L, W> {
    pub fn new(reader: L, err: W) -> Self {
        Self { reader, err }
    }

    /// Consume the prompter, returning its error stream (used by tests).
    #[cfg(test)]
    pub(crate) fn into_err(self) -> W {
        self.err
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "{}", message)
            .map_err(|e| IbsubError::Terminal(format!("failed to write to stderr: {}", e)))
    }
}

impl<L: LineReader, W: Write> Prompt for Prompter<L, W> {
    fn ask(&mut self, mut request: PromptRequest<'_>) -> Result<Option<String>> {
        let text = request.display_text();
        self.reader
            .set_completions(std::mem::take(&mut request.completions));

        loop {
            let line = self.reader.read_line(&text)?;

            if line.is_empty() {
                if let Some(default) = request.default.take() {
                    return Ok(Some(default));
                }
                if !request.required {
                    return Ok(None);
                }
                self.complain(MISSING_VALUE_MESSAGE)?;
            } else if request.accepts(&line) {
                return Ok(Some(line));
            } else {
                self.complain(INVALID_FORMAT_MESSAGE)?;
            }
        }
    }
}
