//! Command and script output formatting.
//!
//! Flags are shell-quoted token by token with `shell_words::quote`. The job
//! command is written verbatim: the user typed it in the target shell's
//! syntax already. The python branch is the one exception, where the command
//! is split into words and handed to `subprocess.call`.

mod python;


use crate::error::{IbsubError, Result};
use crate::steps::Flag;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Program that submits jobs.
pub const SUBMIT_COMMAND: &str = "bsub";

/// Prefix of each scheduler directive in a script.
pub const DIRECTIVE_PREFIX: &str = "#BSUB";

/// Name written into the generated script header.
const GENERATOR: &str = "ibsub";

/// Script syntaxes ibsub can write.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    Bash,
    Zsh,
    Tcsh,
    Ksh,
    Python,
}

impl Syntax {
    /// Every syntax, in the order they are listed to the user.
    pub const ALL: [Syntax; 5] = [
        Syntax::Bash,
        Syntax::Zsh,
        Syntax::Tcsh,
        Syntax::Ksh,
        Syntax::Python,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Syntax::Bash => "bash",
            Syntax::Zsh => "zsh",
            Syntax::Tcsh => "tcsh",
            Syntax::Ksh => "ksh",
            Syntax::Python => "python",
        }
    }

    /// `'bash', 'zsh', 'tcsh', 'ksh', 'python'`
    pub fn quoted_choices() -> String {
        Self::ALL
            .iter()
            .map(|s| format!("'{}'", s.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Syntax {
    type Err = IbsubError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|syntax| syntax.as_str() == s)
            .ok_or_else(|| IbsubError::InvalidSyntax {
                value: s.to_string(),
            })
    }
}

/// Builds submission commands and batch scripts.
#[derive(Debug, Clone)]
pub struct Formatter {
    submit_command: String,
    generated_at: NaiveDateTime,
}

impl Formatter {
    /// A formatter stamping scripts with `generated_at`.
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self {
            submit_command: SUBMIT_COMMAND.to_string(),
            generated_at,
        }
    }

    /// Use a different submission program (e.g. a full path to `bsub`).
    pub fn with_submit_command(mut self, submit_command: impl Into<String>) -> Self {
        self.submit_command = submit_command.into();
        self
    }

    /// `bsub <quoted flags> <command>` on one line.
    pub fn build_command(&self, flags: &[Flag], command: &str) -> String {
        command_line(&self.submit_command, flags, command)
    }

    /// A complete batch script in the named syntax.
    ///
    /// Fails with [`IbsubError::InvalidSyntax`] when `syntax` is not one of
    /// [`Syntax::ALL`].
    pub fn build_script(&self, flags: &[Flag], command: &str, syntax: &str) -> Result<String> {
        let syntax: Syntax = syntax.parse()?;
        self.build_script_for(flags, command, syntax)
    }

    /// Like [`Formatter::build_script`] with an already parsed syntax.
    pub fn build_script_for(&self, flags: &[Flag], command: &str, syntax: Syntax) -> Result<String> {
        let mut lines = vec![
            format!("#!/usr/bin/env {}", syntax),
            "#".to_string(),
            "# LSF batch script".to_string(),
            format!(
                "# Generated by {} on {}",
                GENERATOR,
                self.generated_at.format("%Y-%m-%d %H:%M:%S")
            ),
        ];
        if syntax == Syntax::Python {
            lines.push("# Compatible with Python >= 2.4".to_string());
        }
        lines.push("#".to_string());

        lines.extend(
            flags
                .iter()
                .map(|flag| format!("{} {}", DIRECTIVE_PREFIX, quote_flag(flag))),
        );
        lines.push(String::new());

        if syntax == Syntax::Python {
            lines.push("import subprocess".to_string());
            lines.push(python::subprocess_call(command)?);
        } else {
            lines.push(command.to_string());
        }

        let mut script = lines.join("\n");
        script.push('\n');
        Ok(script)
    }
}

/// `bsub <quoted flags> <command>` using the stock submission program.
pub fn build_command(flags: &[Flag], command: &str) -> String {
    command_line(SUBMIT_COMMAND, flags, command)
}

fn command_line(program: &str, flags: &[Flag], command: &str) -> String {
    let mut parts = vec![shell_words::quote(program).into_owned()];
    parts.extend(flags.iter().map(quote_flag));
    parts.push(command.to_string());
    parts.join(" ")
}

fn quote_flag(flag: &Flag) -> String {
    shell_words::join(flag.tokens())
}
