//! gdb side of a debugging session
//!
//! Generates the command script gdb runs on startup and keeps a cached copy
//! of the `wine-reload` helper, which maps Wine's PE modules into gdb once
//! they're loaded.

mod operations;
mod pure;

pub use operations::{ensure_wine_reload, script_path, write_script};
pub use pure::gdb_commands;
