//! Interactive line editing backed by rustyline.

use super::{LineReader, matching_candidates, word_start};
use crate::error::{IbsubError, Result};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Behavior, CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

/// Completion helper owning the active candidate list.
#[derive(Debug, Default)]
struct CandidateCompleter {
    candidates: Vec<String>,
}

impl Completer for CandidateCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let start = word_start(line, pos);
        Ok((start, matching_candidates(&self.candidates, &line[start..pos])))
    }
}

impl Hinter for CandidateCompleter {
    type Hint = String;
}

impl Highlighter for CandidateCompleter {}

impl Validator for CandidateCompleter {}

impl Helper for CandidateCompleter {}

/// Line reader for an interactive terminal.
pub struct TerminalReader {
    editor: Editor<CandidateCompleter, DefaultHistory>,
}

impl TerminalReader {
    /// Create an editor that draws on the controlling terminal.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .behavior(Behavior::PreferTerm)
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build();

        let mut editor = Editor::with_config(config)
            .map_err(|e| IbsubError::Terminal(format!("failed to initialise line editor: {}", e)))?;
        editor.set_helper(Some(CandidateCompleter::default()));

        Ok(Self { editor })
    }
}

impl LineReader for TerminalReader {
    fn set_completions(&mut self, completions: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.candidates = completions;
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => {
                eprintln!();
                Ok(String::new())
            }
            Err(ReadlineError::Interrupted) => {
                debug!("prompt interrupted");
                Err(IbsubError::Interrupted)
            }
            Err(e) => Err(IbsubError::Terminal(format!("failed to read input: {}", e))),
        }
    }
}
