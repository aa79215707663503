//! Launch module - starting a game under gdb
//!
//! This module provides:
//! - Launch configuration selection and confirmation
//! - Command building for the Wine loader and the debugger
//! - Execution, either with gdb wrapping Wine or attaching to the game
//!
//! ## Module Structure
//! - `types.rs`: Request, mode and target types
//! - `pure/`: Pure functions (command building, answer parsing)
//! - `operations/`: Atomic side effects (processes, prompts)
//! - `pipelines/`: High-level orchestration (execute)

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export public API
pub use operations::{StdinPrompt, SystemRunner};
pub use pipelines::launch_game;
pub use types::{LaunchMode, LaunchRequest};
