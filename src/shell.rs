//! Detection of the shell ibsub was launched from.
//!
//! The detected shell picks the default script syntax. Detection looks at the
//! parent process executable first and falls back to `$SHELL`.

use crate::output::Syntax;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Shells recognised by name, in match order.
pub const SHELLS: [Syntax; 4] = [Syntax::Bash, Syntax::Zsh, Syntax::Tcsh, Syntax::Ksh];

/// Detect the invoking shell, or `None` if it is not a recognised one.
pub fn detect() -> Option<Syntax> {
    let parent = parent_executable();
    let env_shell = std::env::var_os("SHELL").map(PathBuf::from);
    detect_from(parent.as_deref(), env_shell.as_deref())
}

/// Pick a shell from the parent executable, then from `$SHELL`.
pub fn detect_from(parent: Option<&Path>, env_shell: Option<&Path>) -> Option<Syntax> {
    let detected = parent
        .and_then(from_path)
        .or_else(|| env_shell.and_then(from_path));
    debug!(?parent, ?env_shell, ?detected, "shell detection");
    detected
}

/// Match a shell executable path by basename.
///
/// Substring matching accepts versioned names such as `bash-4.1`.
pub fn from_path(path: &Path) -> Option<Syntax> {
    let basename = path.file_name()?.to_string_lossy();
    SHELLS
        .into_iter()
        .find(|shell| basename.contains(shell.as_str()))
}

#[cfg(target_os = "linux")]
fn parent_executable() -> Option<PathBuf> {
    let ppid = std::os::unix::process::parent_id();
    std::fs::read_link(format!("/proc/{}/exe", ppid)).ok()
}

#[cfg(not(target_os = "linux"))]
fn parent_executable() -> Option<PathBuf> {
    None
}
