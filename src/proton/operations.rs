//! Operations module (filesystem lookups)

pub mod locate;

pub use locate::{find_compat_tool, proton_from_config_info, resolve_proton_path};
