//! Runs the prompt steps in order and collects their flags.
//!
//! Steps run strictly one after another. Each step receives the answers of
//! the steps before it; a step that yields no value is neither recorded nor
//! allowed to contribute flags. The order of the returned flags is the order
//! of the `#BSUB` lines (or command-line options) in the output.

use crate::error::Result;
use crate::prompt::Prompt;
use crate::steps::{Answers, Flag, Step};
use tracing::debug;

/// Answers and flags gathered by one pass over the steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub answers: Answers,
    pub flags: Vec<Flag>,
}

/// Run every step in `steps` and return the flags in step order.
pub fn run_all(steps: &[Box<dyn Step + '_>], prompt: &mut dyn Prompt) -> Result<Vec<Flag>> {
    Ok(collect(steps, prompt)?.flags)
}

/// Run every step, keeping the answer map alongside the flags.
pub fn collect(steps: &[Box<dyn Step + '_>], prompt: &mut dyn Prompt) -> Result<Collected> {
    let mut collected = Collected::default();

    for step in steps {
        let outcome = step.run(prompt, &collected.answers)?;

        let Some(value) = outcome.value else {
            debug!(step = %step.id(), "no value; skipping");
            continue;
        };

        debug!(step = %step.id(), flags = outcome.flags.len(), "recorded answer");
        collected.answers.record(step.id(), value);
        collected.flags.extend(outcome.flags);
    }

    Ok(collected)
}
