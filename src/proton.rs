//! Proton/Wine environment setup
//!
//! This module handles finding the Proton build a game runs under and
//! configuring the environment for running its Wine loader outside of Steam.

mod operations;
mod pure;
mod types;

pub use operations::{find_compat_tool, proton_from_config_info, resolve_proton_path};
pub use pure::{build_env, EnvInputs};
pub use types::{PrefixContext, ProtonApp};
