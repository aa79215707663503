//! Steam platform implementation
//!
//! Resolves a game's install, compatdata prefix, Proton build and launch
//! options from a local Steam installation.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use steamlocate::SteamDir;

use super::{PrefixResolver, ResolvedApp};
use crate::appinfo::{read_app_info, windows_launch_options};
use crate::config::ProtonGdbConfig;
use crate::error::{LaunchError, Result};
use crate::proton::{self, EnvInputs, PrefixContext, ProtonApp};

mod compat_tools;
mod locate;

pub use locate::{find_compat_data, find_game};

/// Steam-backed prefix resolver
pub struct SteamResolver {
    pub steam_path: Option<PathBuf>,
    /// Proton directory name or path that takes precedence over Steam's choice
    pub proton_override: Option<String>,
    /// Environment the Proton variables are layered over
    pub base_env: HashMap<String, String>,
    pub extra_env: BTreeMap<String, String>,
}

impl SteamResolver {
    /// Resolver over the current process environment. `proton_override`
    /// wins over the `proton` setting.
    pub fn new(cfg: &ProtonGdbConfig, proton_override: Option<String>) -> Self {
        let base_env = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self {
            steam_path: cfg.steam_path.as_ref().map(PathBuf::from),
            proton_override: proton_override.or_else(|| cfg.proton.clone()),
            base_env,
            extra_env: cfg.extra_env.clone(),
        }
    }

    fn steam_dir(&self) -> Result<SteamDir> {
        let steam_dir = match &self.steam_path {
            Some(path) => SteamDir::from_dir(path)?,
            None => SteamDir::locate()?,
        };
        log::info!("Using Steam installation at {}", steam_dir.path().display());
        Ok(steam_dir)
    }

    fn find_proton(
        &self,
        steam_dir: &SteamDir,
        app_id: u32,
        compat_data: &Path,
        library_folders: &[PathBuf],
    ) -> Result<ProtonApp> {
        let steam_root = steam_dir.path();

        if let Some(name) = &self.proton_override {
            log::info!("Using Proton override '{}'", name);
            return proton::resolve_proton_path(name, library_folders, steam_root)
                .ok_or_else(|| LaunchError::ProtonOverrideNotFound(name.clone()));
        }

        if let Some(proton) = proton::proton_from_config_info(compat_data) {
            log::info!("Prefix was last run with {}", proton.name);
            return Ok(proton);
        }

        match steam_dir.compat_tool_mapping() {
            Ok(mapping) => {
                let names: HashMap<u32, String> = mapping
                    .into_iter()
                    .filter_map(|(id, tool)| Some((id, tool.name?)))
                    .collect();
                if let Some(tool) = compat_tools::mapped_tool_name(&names, app_id) {
                    log::info!("Steam maps appid {} to compat tool {}", app_id, tool);
                    if let Some(proton) =
                        proton::find_compat_tool(tool, library_folders, steam_root)
                    {
                        return Ok(proton);
                    }
                    log::warn!("Compat tool {} is not installed", tool);
                }
            }
            Err(e) => log::warn!("Couldn't read Steam's compat tool mapping: {}", e),
        }

        Err(LaunchError::ProtonNotFound(app_id))
    }
}

impl PrefixResolver for SteamResolver {
    fn resolve(&self, app_id: u32) -> Result<ResolvedApp> {
        let steam_dir = self.steam_dir()?;
        let steam_root = steam_dir.path().to_path_buf();

        let game = find_game(&steam_dir, app_id)?;
        log::info!("Found {} at {}", game.name, game.install_path.display());

        let library_folders = locate::library_folders(&steam_dir);

        let compat_data = find_compat_data(app_id, &[game.library_path.clone(), steam_root.clone()])
            .ok_or(LaunchError::PrefixNotFound(app_id))?;

        let mut proton = self.find_proton(&steam_dir, app_id, &compat_data, &library_folders)?;
        if proton.app_id.is_none() {
            proton.app_id = locate::installed_app_id(&steam_dir, &proton.install_path);
        }

        let appinfo_path = steam_root.join("appcache/appinfo.vdf");
        if !appinfo_path.is_file() {
            return Err(LaunchError::AppInfoMissing(appinfo_path));
        }
        let launch_options = read_app_info(&appinfo_path, app_id)?
            .map(|root| windows_launch_options(&root))
            .unwrap_or_default();
        if launch_options.is_empty() {
            return Err(LaunchError::NoLaunchOptions(app_id));
        }

        let prefix_path = compat_data.join("pfx");
        let env = proton::build_env(
            &self.base_env,
            &EnvInputs {
                proton_dist: &proton.dist_path(),
                game_install: &game.install_path,
                prefix: &prefix_path,
                compat_data: &compat_data,
                steam_root: &steam_root,
                app_id,
                extra: &self.extra_env,
            },
        );

        Ok(ResolvedApp {
            game,
            proton,
            prefix: PrefixContext {
                prefix_path,
                compat_data_path: compat_data,
                env,
            },
            launch_options,
        })
    }
}
