//! Pure functions (no I/O)

pub mod answers;
pub mod command;

pub use answers::{confirmed, parse_selection};
pub use command::{
    attach_command, comm_matches, format_launch_cmd, launch_target, wine_command, wrapped_command,
};
