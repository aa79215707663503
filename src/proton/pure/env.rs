// Proton environment assembly (pure)

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

const DEFAULT_DLL_OVERRIDES: &str =
    "steam.exe=b;dotnetfx35.exe=b;dxvk_config=n;d3d11=n;d3d10=n;d3d10core=n;d3d10_1=n;d3d9=n;dxgi=n";

/// Paths and ids the Wine environment is derived from
pub struct EnvInputs<'a> {
    /// Proton's `files/` (or `dist/`) directory
    pub proton_dist: &'a Path,
    pub game_install: &'a Path,
    pub prefix: &'a Path,
    pub compat_data: &'a Path,
    pub steam_root: &'a Path,
    pub app_id: u32,
    /// Applied last, unconditionally
    pub extra: &'a BTreeMap<String, String>,
}

/// Build the full environment for running a game under Proton's Wine.
///
/// `base` is the caller's environment and is only read. Search-path style
/// variables are merged with what `base` already holds; everything else is
/// a default that an explicitly set variable wins over.
pub fn build_env(base: &HashMap<String, String>, inputs: &EnvInputs) -> BTreeMap<String, String> {
    let mut env: BTreeMap<String, String> =
        base.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

    let dist = inputs.proton_dist.display();
    let game = inputs.game_install.display();
    let prefix = inputs.prefix.display();

    merge_front(&mut env, "PATH", format!("{dist}/bin"), ":");
    merge_back(
        &mut env,
        "WINEDLLPATH",
        format!("{dist}/lib64/wine:{dist}/lib/wine"),
        ":",
    );
    merge_front(
        &mut env,
        "LD_LIBRARY_PATH",
        format!("{dist}/lib64/:{dist}/lib/:{game}"),
        ":",
    );
    merge_front(
        &mut env,
        "WINEDLLOVERRIDES",
        DEFAULT_DLL_OVERRIDES.to_string(),
        ";",
    );
    merge_back(
        &mut env,
        "GST_PLUGIN_SYSTEM_PATH_1_0",
        format!("{dist}/lib64/gstreamer-1.0:{dist}/lib/gstreamer-1.0"),
        ":",
    );

    let app_id = inputs.app_id.to_string();
    let defaults = [
        ("WINEDEBUG", "-all".to_string()),
        ("WINEPREFIX", prefix.to_string()),
        (
            "STEAM_COMPAT_DATA_PATH",
            inputs.compat_data.display().to_string(),
        ),
        ("WINEESYNC", "1".to_string()),
        ("WINEFSYNC", "1".to_string()),
        ("SteamGameId", app_id.clone()),
        ("SteamAppId", app_id),
        (
            "STEAM_COMPAT_CLIENT_INSTALL_PATH",
            inputs.steam_root.display().to_string(),
        ),
        ("WINE_LARGE_ADDRESS_AWARE", "1".to_string()),
        ("WINE_GST_REGISTRY_DIR", format!("{prefix}/gstreamer-1.0/")),
    ];
    for (key, value) in defaults {
        env.entry(key.to_string()).or_insert(value);
    }

    for (key, value) in inputs.extra {
        env.insert(key.clone(), value.clone());
    }

    env
}

/// `value` + delim + existing
fn merge_front(env: &mut BTreeMap<String, String>, key: &str, value: String, delim: &str) {
    let merged = match env.get(key).filter(|v| !v.is_empty()) {
        Some(existing) => format!("{value}{delim}{existing}"),
        None => value,
    };
    env.insert(key.to_string(), merged);
}

/// existing + delim + `value`
fn merge_back(env: &mut BTreeMap<String, String>, key: &str, value: String, delim: &str) {
    let merged = match env.get(key).filter(|v| !v.is_empty()) {
        Some(existing) => format!("{existing}{delim}{value}"),
        None => value,
    };
    env.insert(key.to_string(), merged);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct Fixture {
        dist: PathBuf,
        game: PathBuf,
        prefix: PathBuf,
        compat: PathBuf,
        steam: PathBuf,
        extra: BTreeMap<String, String>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dist: PathBuf::from("/steam/steamapps/common/Proton 9.0/files"),
                game: PathBuf::from("/steam/steamapps/common/Team Fortress 2"),
                prefix: PathBuf::from("/steam/steamapps/compatdata/440/pfx"),
                compat: PathBuf::from("/steam/steamapps/compatdata/440"),
                steam: PathBuf::from("/steam"),
                extra: BTreeMap::new(),
            }
        }

        fn inputs(&self) -> EnvInputs<'_> {
            EnvInputs {
                proton_dist: &self.dist,
                game_install: &self.game,
                prefix: &self.prefix,
                compat_data: &self.compat,
                steam_root: &self.steam,
                app_id: 440,
                extra: &self.extra,
            }
        }
    }

    fn base(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_base_gets_all_proton_variables() {
        let fx = Fixture::new();
        let env = build_env(&HashMap::new(), &fx.inputs());

        assert_eq!(env["PATH"], "/steam/steamapps/common/Proton 9.0/files/bin");
        assert_eq!(env["WINEPREFIX"], "/steam/steamapps/compatdata/440/pfx");
        assert_eq!(env["STEAM_COMPAT_DATA_PATH"], "/steam/steamapps/compatdata/440");
        assert_eq!(env["SteamAppId"], "440");
        assert_eq!(env["SteamGameId"], "440");
        assert_eq!(env["WINEDEBUG"], "-all");
        assert_eq!(env["WINEDLLOVERRIDES"], DEFAULT_DLL_OVERRIDES);
        assert_eq!(env["STEAM_COMPAT_CLIENT_INSTALL_PATH"], "/steam");
        assert_eq!(
            env["WINE_GST_REGISTRY_DIR"],
            "/steam/steamapps/compatdata/440/pfx/gstreamer-1.0/"
        );
        assert_eq!(
            env["LD_LIBRARY_PATH"],
            "/steam/steamapps/common/Proton 9.0/files/lib64/:/steam/steamapps/common/Proton 9.0/files/lib/:/steam/steamapps/common/Team Fortress 2"
        );
    }

    #[test]
    fn search_paths_merge_with_existing_values() {
        let fx = Fixture::new();
        let env = build_env(
            &base(&[
                ("PATH", "/usr/bin"),
                ("WINEDLLPATH", "/opt/dlls"),
                ("WINEDLLOVERRIDES", "dinput8=n,b"),
            ]),
            &fx.inputs(),
        );

        assert_eq!(
            env["PATH"],
            "/steam/steamapps/common/Proton 9.0/files/bin:/usr/bin"
        );
        assert!(env["WINEDLLPATH"].starts_with("/opt/dlls:"));
        assert!(env["WINEDLLOVERRIDES"].ends_with(";dinput8=n,b"));
    }

    #[test]
    fn explicit_variables_win_over_defaults() {
        let fx = Fixture::new();
        let env = build_env(
            &base(&[("WINEDEBUG", "+seh"), ("WINEESYNC", "0")]),
            &fx.inputs(),
        );
        assert_eq!(env["WINEDEBUG"], "+seh");
        assert_eq!(env["WINEESYNC"], "0");
        assert_eq!(env["WINEFSYNC"], "1");
    }

    #[test]
    fn extra_env_overrides_everything() {
        let mut fx = Fixture::new();
        fx.extra.insert("WINEDEBUG".to_string(), "+loaddll".to_string());
        let env = build_env(&base(&[("WINEDEBUG", "+seh")]), &fx.inputs());
        assert_eq!(env["WINEDEBUG"], "+loaddll");
    }

    #[test]
    fn base_environment_is_left_untouched() {
        let fx = Fixture::new();
        let original = base(&[("PATH", "/usr/bin"), ("HOME", "/home/u")]);
        let copy = original.clone();
        let env = build_env(&original, &fx.inputs());
        assert_eq!(original, copy);
        assert_eq!(env["HOME"], "/home/u");
    }
}
