//! Completion data fetched from the batch system.
//!
//! Queue and group listings come from LSF's `bqueues` and `bugroup`. Both
//! commands are optional: when they are missing, fail, or print nothing
//! useful, the provider degrades to an empty list. Every result, including
//! an empty one, is memoized for the lifetime of the process.

use crate::config::Config;
use std::cell::OnceCell;
use std::process::{Command, Stdio};
use tracing::{debug, warn};


/// Runs an external query command and returns its stdout.
///
/// Implementations return `None` when the command cannot be launched or exits
/// unsuccessfully. They never panic or propagate errors.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Option<String>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        (**self).run(program, args)
    }
}

/// Runs commands with `std::process::Command`, discarding stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(program, error = %e, "failed to launch completion query");
                return None;
            }
        };

        if !output.status.success() {
            warn!(
                program,
                code = ?output.status.code(),
                "completion query exited unsuccessfully"
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Source of tab-completion candidates for prompts.
pub trait CompletionProvider {
    /// Queue names the current user may submit to.
    fn queue_names(&self) -> &[String];

    /// Names of user groups the current user belongs to.
    fn group_names_for_current_user(&self) -> &[String];
}

/// Memoizing provider backed by the LSF query commands.
pub struct BatchCompletions<R: CommandRunner> {
    runner: R,
    queue_command: String,
    group_command: String,
    user: Option<String>,
    queues: OnceCell<Vec<String>>,
    groups: OnceCell<Vec<String>>,
}

impl BatchCompletions<SystemRunner> {
    /// Build a provider that shells out for real, scoped to `$USER`.
    pub fn from_env(config: &Config) -> Self {
        let user = std::env::var("USER").ok().filter(|u| !u.is_empty());
        Self::new(SystemRunner, config, user)
    }
}

impl<R: CommandRunner> BatchCompletions<R> {
    /// Create a provider. Nothing is queried until a listing is requested.
    pub fn new(runner: R, config: &Config, user: Option<String>) -> Self {
        Self {
            runner,
            queue_command: config.queue_command.clone(),
            group_command: config.group_command.clone(),
            user,
            queues: OnceCell::new(),
            groups: OnceCell::new(),
        }
    }

    fn fetch_queues(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(user) = self.user.as_deref() {
            // Limit the listing to queues this user is allowed to use.
            args.extend(["-u", user]);
        }

        let queues = self
            .runner
            .run(&self.queue_command, &args)
            .map(|stdout| parse_queue_listing(&stdout))
            .unwrap_or_default();
        debug!(count = queues.len(), "queue completions loaded");
        queues
    }

    fn fetch_groups(&self) -> Vec<String> {
        // Without a user every group would match, which is too many completions.
        let Some(user) = self.user.as_deref() else {
            debug!("no current user; skipping group completions");
            return Vec::new();
        };

        let groups = self
            .runner
            .run(&self.group_command, &[])
            .map(|stdout| parse_group_listing(&stdout, user))
            .unwrap_or_default();
        debug!(count = groups.len(), "group completions loaded");
        groups
    }
}

impl<R: CommandRunner> CompletionProvider for BatchCompletions<R> {
    fn queue_names(&self) -> &[String] {
        self.queues.get_or_init(|| self.fetch_queues())
    }

    fn group_names_for_current_user(&self) -> &[String] {
        self.groups.get_or_init(|| self.fetch_groups())
    }
}

/// Parse `bqueues` output: skip the header, keep the first column.
pub fn parse_queue_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Parse `bugroup` output: skip the header, keep groups listing `user` as a member.
pub fn parse_group_listing(stdout: &str, user: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let group = tokens.next()?;
            tokens.any(|member| member == user).then(|| group.to_string())
        })
        .collect()
}
