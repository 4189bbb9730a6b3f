//! Configuration model for ibsub.
//!
//! Configuration is optional. It is read from the YAML file named by
//! `--config` or `IBSUB_CONFIG`; without either, built-in defaults apply.
//! Unknown fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::CONFIG_ENV_VAR;
pub use types::OutputType;
