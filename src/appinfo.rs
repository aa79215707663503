//! Steam appinfo.vdf reader
//!
//! Steam caches every app's PICS metadata in `appcache/appinfo.vdf`, a
//! binary KeyValues file. We only need one thing out of it: the launch
//! configurations of a single app.
//!
//! ## Module Structure
//! - `types.rs`: KeyValues tree, launch option and error types
//! - `pure/`: Byte-level decoding and launch option extraction (no I/O)
//! - `operations.rs`: Reading the cache file from disk

mod operations;
mod pure;
mod types;

pub use operations::read_app_info;
pub use pure::windows_launch_options;
pub use types::{AppInfoError, LaunchOption, Value};

#[cfg(test)]
pub(crate) use pure::parser::{fixtures, MAGIC_V29};
