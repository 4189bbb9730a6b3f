//! Config struct definition and default implementation.

use super::types::*;
use crate::output::Syntax;
use serde::{Deserialize, Serialize};

/// Configuration for ibsub.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Batch system commands
    // =========================================================================
    /// Program name written at the start of generated submission commands.
    #[serde(default = "default_submit_command")]
    pub submit_command: String,

    /// Command listing queues (used for completion and validation).
    #[serde(default = "default_queue_command")]
    pub queue_command: String,

    /// Command listing user groups (used for project code completion).
    #[serde(default = "default_group_command")]
    pub group_command: String,

    // =========================================================================
    // Prompt defaults
    // =========================================================================
    /// Queue offered when the user presses Enter at the queue prompt.
    #[serde(default = "default_queue")]
    pub default_queue: String,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Output type used when `--type` is not given.
    #[serde(default)]
    pub output_type: OutputType,

    /// Script syntax used when `--syntax` is not given. Falls back to shell
    /// detection when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<Syntax>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit_command: default_submit_command(),
            queue_command: default_queue_command(),
            group_command: default_group_command(),
            default_queue: default_queue(),
            output_type: OutputType::default(),
            syntax: None,
        }
    }
}
