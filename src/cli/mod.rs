//! CLI argument parsing for ibsub.
//!
//! Uses clap derive macros for declarative argument definitions. The prompt
//! sequence itself lives in the `commands` module.

use crate::config::{Config, OutputType};
use crate::output::Syntax;
use clap::Parser;
use std::path::PathBuf;

/// Interactively build an LSF batch job.
///
/// ibsub asks for the job name, project, task counts, wall clock limit,
/// queue, output files and email notifications, then the command to run.
/// The result is printed to stdout as either a batch script (pipe it into
/// `bsub` or save it) or a single `bsub` command line. Prompts go to the
/// terminal, so stdout carries only the result.
#[derive(Parser, Debug)]
#[command(name = "ibsub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Type of output (default: script, or `output_type` from config).
    #[arg(short = 't', long = "type", value_enum)]
    pub output_type: Option<OutputType>,

    /// Shell syntax to use with `--type script` (default: detected shell,
    /// falling back to bash).
    #[arg(short, long, value_enum)]
    pub syntax: Option<Syntax>,

    /// Path to a YAML config file (overrides IBSUB_CONFIG).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log diagnostics (completion queries, answers) to stderr.
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Output type from the flag, else config.
    pub fn resolve_output_type(&self, config: &Config) -> OutputType {
        self.output_type.unwrap_or(config.output_type)
    }

    /// Syntax from the flag, else config, else `detected`, else bash.
    pub fn resolve_syntax(&self, config: &Config, detected: Option<Syntax>) -> Syntax {
        self.syntax
            .or(config.syntax)
            .or(detected)
            .unwrap_or(Syntax::Bash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["ibsub"]).unwrap();
        assert_eq!(cli.output_type, None);
        assert_eq!(cli.syntax, None);
        assert_eq!(cli.config, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::try_parse_from(["ibsub", "-t", "command", "-s", "zsh"]).unwrap();
        assert_eq!(cli.output_type, Some(OutputType::Command));
        assert_eq!(cli.syntax, Some(Syntax::Zsh));
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::try_parse_from([
            "ibsub",
            "--type",
            "script",
            "--syntax",
            "python",
            "--config",
            "/etc/ibsub.yaml",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.output_type, Some(OutputType::Script));
        assert_eq!(cli.syntax, Some(Syntax::Python));
        assert_eq!(cli.config, Some(PathBuf::from("/etc/ibsub.yaml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_rejects_unknown_syntax() {
        assert!(Cli::try_parse_from(["ibsub", "--syntax", "fish"]).is_err());
    }

    #[test]
    fn parse_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["ibsub", "--type", "json"]).is_err());
    }

    #[test]
    fn help_and_version_exit_early() {
        let help = Cli::try_parse_from(["ibsub", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let version = Cli::try_parse_from(["ibsub", "-V"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn resolve_output_type_prefers_flag() {
        let config = Config {
            output_type: OutputType::Command,
            ..Config::default()
        };

        let cli = Cli::try_parse_from(["ibsub"]).unwrap();
        assert_eq!(cli.resolve_output_type(&config), OutputType::Command);

        let cli = Cli::try_parse_from(["ibsub", "-t", "script"]).unwrap();
        assert_eq!(cli.resolve_output_type(&config), OutputType::Script);
    }

    #[test]
    fn resolve_syntax_order() {
        let cli = Cli::try_parse_from(["ibsub"]).unwrap();
        let mut config = Config::default();

        assert_eq!(cli.resolve_syntax(&config, None), Syntax::Bash);
        assert_eq!(cli.resolve_syntax(&config, Some(Syntax::Tcsh)), Syntax::Tcsh);

        config.syntax = Some(Syntax::Ksh);
        assert_eq!(cli.resolve_syntax(&config, Some(Syntax::Tcsh)), Syntax::Ksh);

        let cli = Cli::try_parse_from(["ibsub", "-s", "python"]).unwrap();
        assert_eq!(cli.resolve_syntax(&config, Some(Syntax::Tcsh)), Syntax::Python);
    }
}
