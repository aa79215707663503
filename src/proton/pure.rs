//! Pure functions (no I/O)

pub mod config_info;
pub mod env;
pub mod tool_names;

pub use env::{build_env, EnvInputs};
