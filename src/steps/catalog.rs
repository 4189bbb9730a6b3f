//! Step implementations.

use super::{Answers, Flag, Step, StepId, StepOutcome};
use crate::completers::CompletionProvider;
use crate::error::{IbsubError, Result};
use crate::prompt::{Prompt, PromptRequest};
use crate::validate::{positive_integer, time_duration, yes_no};

const POSITIVE_NUMBER_HINT: &str = "positive number";
const YES_NO_HINT: &str = "y/n";

/// Job name (`-J`). Required.
#[derive(Debug, Default, Clone, Copy)]
pub struct JobName;

impl Step for JobName {
    fn id(&self) -> StepId {
        StepId::JobName
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        let value = prompt.ask(PromptRequest::new("Job name").required())?;
        Ok(with_flag(value, "-J"))
    }
}

/// Project code (`-P`). Optional; the user's groups are offered as completions.
pub struct ProjectCode<'a> {
    completions: &'a dyn CompletionProvider,
}

impl<'a> ProjectCode<'a> {
    pub fn new(completions: &'a dyn CompletionProvider) -> Self {
        Self { completions }
    }
}

impl Step for ProjectCode<'_> {
    fn id(&self) -> StepId {
        StepId::ProjectCode
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        let groups = self.completions.group_names_for_current_user().to_vec();
        let value = prompt.ask(PromptRequest::new("Project code").completions(groups))?;
        Ok(with_flag(value, "-P"))
    }
}

/// Total number of tasks (`-n`). Required.
#[derive(Debug, Default, Clone, Copy)]
pub struct TasksPerJob;

impl Step for TasksPerJob {
    fn id(&self) -> StepId {
        StepId::TasksPerJob
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        let value = prompt.ask(
            PromptRequest::new("Tasks per job")
                .required()
                .format_hint(POSITIVE_NUMBER_HINT)
                .validator(positive_integer),
        )?;
        Ok(with_flag(value, "-n"))
    }
}

/// Tasks placed on each node (`-R span[ptile=N]`). Optional.
#[derive(Debug, Default, Clone, Copy)]
pub struct TasksPerNode;

impl Step for TasksPerNode {
    fn id(&self) -> StepId {
        StepId::TasksPerNode
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        let value = prompt.ask(
            PromptRequest::new("Tasks per node")
                .format_hint(POSITIVE_NUMBER_HINT)
                .validator(positive_integer),
        )?;

        Ok(match value {
            Some(value) => {
                let flags = vec![Flag::with_arg("-R", format!("span[ptile={}]", value))];
                StepOutcome::answered(value, flags)
            }
            None => StepOutcome::skipped(),
        })
    }
}

/// Wall clock limit (`-W`). Required.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClockTime;

impl Step for WallClockTime {
    fn id(&self) -> StepId {
        StepId::WallClockTime
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        let value = prompt.ask(
            PromptRequest::new("Wall clock time limit")
                .required()
                .format_hint("00:00 for hours or 00 for minutes")
                .validator(time_duration),
        )?;
        Ok(with_flag(value, "-W"))
    }
}

/// Queue (`-q`). Required, with a configurable default.
///
/// Typed names must appear in the queue listing. When no listing is
/// available, any name is accepted. The default is never validated.
pub struct QueueName<'a> {
    completions: &'a dyn CompletionProvider,
    default_queue: String,
}

impl<'a> QueueName<'a> {
    pub fn new(completions: &'a dyn CompletionProvider, default_queue: String) -> Self {
        Self {
            completions,
            default_queue,
        }
    }
}

impl Step for QueueName<'_> {
    fn id(&self) -> StepId {
        StepId::QueueName
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        let queues = self.completions.queue_names();

        let mut request = PromptRequest::new("Queue")
            .required()
            .default_value(Some(self.default_queue.clone()))
            .completions(queues.to_vec());
        if !queues.is_empty() {
            request = request.validator(|text| queues.iter().any(|queue| queue == text));
        }

        let value = prompt.ask(request)?;
        Ok(with_flag(value, "-q"))
    }
}

/// Standard output file (`-o`). Defaults to `<job name>.%J.out`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputFileName;

impl Step for OutputFileName {
    fn id(&self) -> StepId {
        StepId::OutputFileName
    }

    fn run(&self, prompt: &mut dyn Prompt, answers: &Answers) -> Result<StepOutcome> {
        let default = job_file_default(answers, "out");
        let value = prompt.ask(PromptRequest::new("Output file name").default_value(default))?;
        Ok(with_flag(value, "-o"))
    }
}

/// Standard error file (`-e`). Defaults to `<job name>.%J.err`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorFileName;

impl Step for ErrorFileName {
    fn id(&self) -> StepId {
        StepId::ErrorFileName
    }

    fn run(&self, prompt: &mut dyn Prompt, answers: &Answers) -> Result<StepOutcome> {
        let default = job_file_default(answers, "err");
        let value = prompt.ask(PromptRequest::new("Error file name").default_value(default))?;
        Ok(with_flag(value, "-e"))
    }
}

/// Email when the job starts (`-B`).
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailOnBegin;

impl Step for EmailOnBegin {
    fn id(&self) -> StepId {
        StepId::EmailOnBegin
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        ask_email(prompt, "Notify by email when job begins?", "-B")
    }
}

/// Email when the job ends (`-N`).
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailOnFinish;

impl Step for EmailOnFinish {
    fn id(&self) -> StepId {
        StepId::EmailOnFinish
    }

    fn run(&self, prompt: &mut dyn Prompt, _answers: &Answers) -> Result<StepOutcome> {
        ask_email(prompt, "Notify by email when job finishes?", "-N")
    }
}

/// The command the job runs. Not a flag; it becomes the job body.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptCommand;

impl PromptCommand {
    pub fn run(&self, prompt: &mut dyn Prompt) -> Result<String> {
        prompt
            .ask(PromptRequest::new("Command to run").required())?
            .ok_or_else(|| IbsubError::UserError("no command to run was entered".to_string()))
    }
}

fn with_flag(value: Option<String>, option: &str) -> StepOutcome {
    match value {
        Some(value) => {
            let flags = vec![Flag::with_arg(option, value.clone())];
            StepOutcome::answered(value, flags)
        }
        None => StepOutcome::skipped(),
    }
}

fn job_file_default(answers: &Answers, extension: &str) -> Option<String> {
    answers
        .get(StepId::JobName)
        .map(|name| format!("{}.%J.{}", name, extension))
}

/// A "n" answer counts as no answer at all.
fn ask_email(prompt: &mut dyn Prompt, message: &str, option: &str) -> Result<StepOutcome> {
    let value = prompt.ask(
        PromptRequest::new(message)
            .format_hint(YES_NO_HINT)
            .default_value(Some("n".to_string()))
            .validator(yes_no),
    )?;

    Ok(match value {
        Some(value) if value != "n" => StepOutcome::answered(value, vec![Flag::bare(option)]),
        _ => StepOutcome::skipped(),
    })
}
