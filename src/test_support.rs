use crate::completers::{CommandRunner, CompletionProvider};
use crate::error::{IbsubError, Result};
use crate::input::LineReader;
use crate::prompt::{Prompt, PromptRequest};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Line reader fed from a fixed script of lines.
///
/// Once the script runs out every read behaves like end-of-input. A line of
/// `"^C"` simulates the user pressing Ctrl-C.
#[derive(Debug, Default)]
pub(crate) struct ScriptedReader {
    lines: VecDeque<String>,
    pub(crate) prompts: Vec<String>,
    pub(crate) completions: Vec<Vec<String>>,
}

impl ScriptedReader {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl LineReader for ScriptedReader {
    fn set_completions(&mut self, completions: Vec<String>) {
        self.completions.push(completions);
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.lines.pop_front() {
            Some(line) if line == "^C" => Err(IbsubError::Interrupted),
            Some(line) => Ok(line),
            None => Ok(String::new()),
        }
    }
}

impl LineReader for &mut ScriptedReader {
    fn set_completions(&mut self, completions: Vec<String>) {
        (**self).set_completions(completions)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }
}

/// The parts of a [`PromptRequest`] a test can compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub(crate) message: String,
    pub(crate) required: bool,
    pub(crate) format_hint: Option<String>,
    pub(crate) has_validator: bool,
    pub(crate) default: Option<String>,
    pub(crate) completions: Vec<String>,
}

/// Prompt fake returning canned answers and recording each request.
///
/// Answers are returned verbatim, without applying defaults or validators.
#[derive(Debug, Default)]
pub(crate) struct RecordingPrompt {
    answers: VecDeque<Option<String>>,
    pub(crate) requests: Vec<RecordedRequest>,
}

impl RecordingPrompt {
    pub(crate) fn new(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
            requests: Vec::new(),
        }
    }

    pub(crate) fn answering(answer: &str) -> Self {
        Self::new(&[Some(answer)])
    }

    pub(crate) fn last_request(&self) -> &RecordedRequest {
        self.requests.last().expect("no prompt was asked")
    }
}

impl Prompt for RecordingPrompt {
    fn ask(&mut self, request: PromptRequest<'_>) -> Result<Option<String>> {
        self.requests.push(RecordedRequest {
            message: request.message.to_string(),
            required: request.required,
            format_hint: request.format_hint.map(str::to_string),
            has_validator: request.validator.is_some(),
            default: request.default.clone(),
            completions: request.completions.clone(),
        });
        Ok(self.answers.pop_front().flatten())
    }
}

/// Command runner returning the same canned stdout for every call.
#[derive(Debug, Default)]
pub(crate) struct CannedRunner {
    stdout: Option<String>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl CannedRunner {
    /// `None` simulates a missing or failing command.
    pub(crate) fn new(stdout: Option<&str>) -> Self {
        Self {
            stdout: stdout.map(str::to_string),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every invocation so far as `[program, args...]`.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for CannedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);
        self.stdout.clone()
    }
}

/// Completion provider with fixed listings.
#[derive(Debug, Default)]
pub(crate) struct StaticCompletions {
    pub(crate) queues: Vec<String>,
    pub(crate) groups: Vec<String>,
}

impl StaticCompletions {
    pub(crate) fn with_queues(queues: &[&str]) -> Self {
        Self {
            queues: queues.iter().map(|s| s.to_string()).collect(),
            groups: Vec::new(),
        }
    }
}

impl CompletionProvider for StaticCompletions {
    fn queue_names(&self) -> &[String] {
        &self.queues
    }

    fn group_names_for_current_user(&self) -> &[String] {
        &self.groups
    }
}
