//! Operations module (atomic side effects)

pub mod procfs;
pub mod process;
pub mod prompt;

pub use process::{ProcessRunner, SystemRunner};
pub use prompt::{Prompt, StdinPrompt};
