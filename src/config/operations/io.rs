use crate::config::types::ProtonGdbConfig;
use crate::paths::PATH_DATA;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> ProtonGdbConfig {
    load_cfg_from(&PATH_DATA.join("settings.json"))
}

pub fn load_cfg_from(path: &Path) -> ProtonGdbConfig {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, ProtonGdbConfig>(BufReader::new(file)) {
            Ok(mut config) => {
                config.sanitize();
                return config;
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
            }
        }
    }

    // Return default settings if file doesn't exist or has error
    ProtonGdbConfig::default()
}

pub fn save_cfg(config: &ProtonGdbConfig) -> Result<(), Box<dyn Error>> {
    save_cfg_to(config, &PATH_DATA.join("settings.json"))
}

pub fn save_cfg_to(config: &ProtonGdbConfig, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_cfg_from(&dir.path().join("settings.json"));
        assert_eq!(cfg, ProtonGdbConfig::default());
    }

    #[test]
    fn garbage_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(load_cfg_from(&path), ProtonGdbConfig::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");
        let mut cfg = ProtonGdbConfig::default();
        cfg.proton = Some("GE-Proton9-20".to_string());
        cfg.extra_env.insert("DXVK_HUD".to_string(), "fps".to_string());

        save_cfg_to(&cfg, &path).unwrap();
        assert_eq!(load_cfg_from(&path), cfg);
    }
}
