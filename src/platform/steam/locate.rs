//! Steam game and prefix resolution
//!
//! Uses steamlocate to find installed Steam games.

use std::path::{Path, PathBuf};

use steamlocate::SteamDir;

use crate::error::{LaunchError, Result};
use crate::platform::SteamGame;

/// Find an installed Steam game by app ID
///
/// Uses steamlocate to search all Steam library folders for the app.
pub fn find_game(steam_dir: &SteamDir, app_id: u32) -> Result<SteamGame> {
    if let Some((app, library)) = steam_dir.find_app(app_id)? {
        let install_path = library.resolve_app_dir(&app);
        if install_path.exists() {
            return Ok(SteamGame {
                app_id,
                name: app.name.clone().unwrap_or_else(|| app.install_dir.clone()),
                install_path,
                library_path: library.path().to_path_buf(),
            });
        }
        log::warn!(
            "Steam lists appid {} but {} is missing",
            app_id,
            install_path.display()
        );
    }

    Err(LaunchError::GameNotFound(app_id))
}

/// Every library root Steam knows about, starting with its own
pub fn library_folders(steam_dir: &SteamDir) -> Vec<PathBuf> {
    let mut folders = vec![steam_dir.path().to_path_buf()];

    match steam_dir.libraries() {
        Ok(libraries) => {
            for library in libraries.flatten() {
                let path = library.path().to_path_buf();
                if !folders.contains(&path) {
                    folders.push(path);
                }
            }
        }
        Err(e) => log::warn!("Couldn't list Steam libraries: {}", e),
    }

    folders
}

/// Appid of the Steam app installed at `dir`, if Steam installed it
pub fn installed_app_id(steam_dir: &SteamDir, dir: &Path) -> Option<u32> {
    let libraries = steam_dir.libraries().ok()?;
    libraries.flatten().find_map(|library| {
        library
            .apps()
            .flatten()
            .find(|app| library.resolve_app_dir(app) == dir)
            .map(|app| app.app_id)
    })
}

/// Find `steamapps/compatdata/<appid>` holding an initialized prefix.
///
/// Libraries are tried in order; Steam normally keeps compatdata in the
/// game's own library but falls back to the main one.
pub fn find_compat_data(app_id: u32, libraries: &[PathBuf]) -> Option<PathBuf> {
    libraries
        .iter()
        .map(|lib| compat_data_dir(lib, app_id))
        .find(|dir| dir.join("pfx").is_dir())
}

fn compat_data_dir(library: &Path, app_id: u32) -> PathBuf {
    library
        .join("steamapps/compatdata")
        .join(app_id.to_string())
}
