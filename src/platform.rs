//! Platform abstraction - WHERE a game's prefix comes from
//!
//! The launcher only needs a game's install, its Proton build, its prefix
//! and the environment to run in it. `PrefixResolver` is the seam between
//! finding those and using them; `SteamResolver` finds them in a local
//! Steam installation.

use std::path::PathBuf;

use crate::appinfo::LaunchOption;
use crate::error::Result;
use crate::proton::{PrefixContext, ProtonApp};

/// A Steam app installed in one of the libraries
#[derive(Clone, Debug, PartialEq)]
pub struct SteamGame {
    pub app_id: u32,
    pub name: String,
    pub install_path: PathBuf,
    /// Library root holding the app's `steamapps/`
    pub library_path: PathBuf,
}

/// Everything resolved for one appid
#[derive(Clone, Debug)]
pub struct ResolvedApp {
    pub game: SteamGame,
    pub proton: ProtonApp,
    pub prefix: PrefixContext,
    /// Launch configurations runnable under Proton, in appinfo order
    pub launch_options: Vec<LaunchOption>,
}

/// Resolves an appid to its prefix and launch environment
pub trait PrefixResolver {
    /// Fails with a not-found error when the app isn't installed or has
    /// never been run through Proton
    fn resolve(&self, app_id: u32) -> Result<ResolvedApp>;
}

mod steam;

pub use steam::SteamResolver;
