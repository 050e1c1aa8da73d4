//! Subcommand implementations

mod doctor;
mod generate;
mod voices;

pub use doctor::cmd_doctor;
pub use generate::{cmd_generate, GenerateOpts};
pub use voices::cmd_voices;
