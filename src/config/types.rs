//! Configuration types and defaults for ibsub.

use serde::{Deserialize, Serialize};

/// What ibsub prints once all prompts are answered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    /// A batch script with `#BSUB` directives (default).
    #[default]
    Script,
    /// A single `bsub` command line.
    Command,
}

// ============================================================================
// Default value functions
// ============================================================================

pub fn default_submit_command() -> String {
    "bsub".to_string()
}

pub fn default_queue_command() -> String {
    "bqueues".to_string()
}

pub fn default_group_command() -> String {
    "bugroup".to_string()
}

pub fn default_queue() -> String {
    "regular".to_string()
}
