//! The questions ibsub asks, in the order it asks them.
//!
//! Each [`Step`] asks one question through a [`Prompt`] and turns the answer
//! into zero or more scheduler [`Flag`]s. Steps see the answers of earlier
//! steps through a read-only [`Answers`] view; this is how the output and
//! error file names default to the job name.

mod catalog;

#[cfg(test)]
mod tests;

pub use catalog::{
    EmailOnBegin, EmailOnFinish, ErrorFileName, JobName, OutputFileName, ProjectCode,
    PromptCommand, QueueName, TasksPerJob, TasksPerNode, WallClockTime,
};

use crate::completers::CompletionProvider;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::Prompt;
use std::fmt;

/// Stable identity of a step, used as the key in [`Answers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    JobName,
    ProjectCode,
    TasksPerJob,
    TasksPerNode,
    WallClockTime,
    QueueName,
    OutputFileName,
    ErrorFileName,
    EmailOnBegin,
    EmailOnFinish,
}

impl StepId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::JobName => "job_name",
            StepId::ProjectCode => "project_code",
            StepId::TasksPerJob => "tasks_per_job",
            StepId::TasksPerNode => "tasks_per_node",
            StepId::WallClockTime => "wall_clock_time",
            StepId::QueueName => "queue_name",
            StepId::OutputFileName => "output_file_name",
            StepId::ErrorFileName => "error_file_name",
            StepId::EmailOnBegin => "email_on_begin",
            StepId::EmailOnFinish => "email_on_finish",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduler option, with or without an argument (`-J name`, `-B`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub option: String,
    pub argument: Option<String>,
}

impl Flag {
    pub fn with_arg(option: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            argument: Some(argument.into()),
        }
    }

    pub fn bare(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            argument: None,
        }
    }

    /// The option followed by its argument, if any.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.option.as_str()).chain(self.argument.as_deref())
    }
}

/// Answers recorded so far, in the order the steps ran.
///
/// Only steps that produced a value appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<(StepId, String)>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value recorded for `id`, if that step ran and produced one.
    pub fn get(&self, id: StepId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(step, _)| *step == id)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (StepId, &str)> {
        self.entries.iter().map(|(id, value)| (*id, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record(&mut self, id: StepId, value: String) {
        match self.entries.iter_mut().find(|(step, _)| *step == id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((id, value)),
        }
    }
}

/// What a step produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub value: Option<String>,
    pub flags: Vec<Flag>,
}

impl StepOutcome {
    pub fn answered(value: String, flags: Vec<Flag>) -> Self {
        Self {
            value: Some(value),
            flags,
        }
    }

    /// No value and no flags.
    pub fn skipped() -> Self {
        Self::default()
    }
}

/// A single question in the interactive sequence.
pub trait Step {
    fn id(&self) -> StepId;

    /// Ask the question. `answers` holds only steps that ran before this one.
    fn run(&self, prompt: &mut dyn Prompt, answers: &Answers) -> Result<StepOutcome>;
}

/// The full, ordered list of flag-producing steps.
///
/// [`PromptCommand`] is not included; the command is asked for separately
/// because it becomes the job body rather than a flag.
pub fn default_catalog<'a>(
    completions: &'a dyn CompletionProvider,
    config: &Config,
) -> Vec<Box<dyn Step + 'a>> {
    vec![
        Box::new(JobName),
        Box::new(ProjectCode::new(completions)),
        Box::new(TasksPerJob),
        Box::new(TasksPerNode),
        Box::new(WallClockTime),
        Box::new(QueueName::new(completions, config.default_queue.clone())),
        Box::new(OutputFileName),
        Box::new(ErrorFileName),
        Box::new(EmailOnBegin),
        Box::new(EmailOnFinish),
    ]
}
