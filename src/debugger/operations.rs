//! Operations module (atomic side effects)

pub mod script_file;
pub mod wine_reload;

pub use script_file::{script_path, write_script};
pub use wine_reload::ensure_wine_reload;
