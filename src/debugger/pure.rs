//! Pure functions (no I/O)

pub mod script;

pub use script::gdb_commands;
