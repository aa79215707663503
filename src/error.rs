//! Error types for protongdb

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::appinfo::AppInfoError;

/// Result type for resolving and launching
pub type Result<T> = std::result::Result<T, LaunchError>;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// Appid is not installed in any Steam library
    #[error("Cannot find game with appid: {0}")]
    GameNotFound(u32),

    /// The game was never started through Steam Play, so it has no prefix yet
    #[error("Cannot find prefix for appid: {0} (run it through Steam once first)")]
    PrefixNotFound(u32),

    #[error("Cannot find a Proton app for appid: {0}")]
    ProtonNotFound(u32),

    /// `--proton` / `proton` setting didn't name a usable build
    #[error("Proton not found at '{0}'")]
    ProtonOverrideNotFound(String),

    #[error("Cannot find appinfo at {0}")]
    AppInfoMissing(PathBuf),

    #[error("Cannot read appinfo: {0}")]
    AppInfo(#[from] AppInfoError),

    #[error("Cannot find launch executable for appid: {0}")]
    NoLaunchOptions(u32),

    #[error("Invalid app configuration")]
    InvalidSelection,

    #[error("Steam installation not found: {0}")]
    Steam(#[from] steamlocate::Error),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't find pid to attach for {0}")]
    AttachTimeout(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
