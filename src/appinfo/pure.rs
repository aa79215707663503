//! Pure decoding functions (no I/O)

pub mod launch_options;
pub mod parser;

pub use launch_options::windows_launch_options;
pub use parser::find_app;
