//! The ibsub command: ask every question, then print the result.
//!
//! Nothing reaches stdout until every answer has been collected, so an
//! interrupted session never leaves a half-written script behind.


use crate::cli::Cli;
use crate::completers::{BatchCompletions, CompletionProvider};
use crate::config::{Config, OutputType};
use crate::error::Result;
use crate::input::open_stdin_reader;
use crate::orchestrator::run_all;
use crate::output::{Formatter, Syntax};
use crate::prompt::{Prompt, Prompter};
use crate::shell;
use crate::steps::{PromptCommand, default_catalog};
use chrono::{Local, NaiveDateTime};
use tracing::debug;

/// What to produce once the prompts are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRequest {
    pub output_type: OutputType,
    pub syntax: Syntax,
    pub generated_at: NaiveDateTime,
}

/// Run ibsub end to end against the real terminal.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    let output_type = cli.resolve_output_type(&config);
    let syntax = match output_type {
        // Only scripts care about syntax; skip detection for commands.
        OutputType::Script => cli.resolve_syntax(&config, shell::detect()),
        OutputType::Command => cli.resolve_syntax(&config, None),
    };
    let request = OutputRequest {
        output_type,
        syntax,
        generated_at: Local::now().naive_local(),
    };
    debug!(?request, "starting prompts");

    let completions = BatchCompletions::from_env(&config);
    let mut prompter = Prompter::new(open_stdin_reader()?, std::io::stderr());

    let out = generate(&mut prompter, &completions, &config, &request)?;
    print!("{}", out);
    Ok(())
}

/// Ask all questions through `prompt` and format the answers.
///
/// Scripts come back with a trailing newline; commands get one appended so
/// both print as complete lines.
pub fn generate(
    prompt: &mut dyn Prompt,
    completions: &dyn CompletionProvider,
    config: &Config,
    request: &OutputRequest,
) -> Result<String> {
    let catalog = default_catalog(completions, config);
    let flags = run_all(&catalog, prompt)?;
    let command = PromptCommand.run(prompt)?;

    let formatter =
        Formatter::new(request.generated_at).with_submit_command(config.submit_command.as_str());

    match request.output_type {
        OutputType::Script => formatter.build_script_for(&flags, &command, request.syntax),
        OutputType::Command => {
            let mut line = formatter.build_command(&flags, &command);
            line.push('\n');
            Ok(line)
        }
    }
}
