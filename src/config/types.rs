use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_WINE_RELOAD_URL: &str = "https://gist.githubusercontent.com/rbernon/cdbdc1b0e892f91e7449fcf3dda80bb7/raw/d8cf549bf751d99ed0fe515e36f99ff5c01b7287/WineReload.py";

/// Persistent launcher settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProtonGdbConfig {
    /// Debugger binary, resolved through PATH when not absolute
    #[serde(default = "default_debugger", alias = "gdb")]
    pub debugger: String,
    /// Extra arguments passed to the debugger before `-x`
    #[serde(default)]
    pub debugger_args: Vec<String>,
    /// Proton build to use instead of the one recorded for the prefix.
    /// Either an absolute directory or a directory name under steamapps/common
    /// or compatibilitytools.d
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proton: Option<String>,
    /// Steam root, when steamlocate can't find it on its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_path: Option<String>,
    /// Where to fetch the wine-reload gdb helper from. Empty disables fetching
    #[serde(default = "default_wine_reload_url")]
    pub wine_reload_url: String,
    /// Appended to the generated gdb script, one command per entry
    #[serde(default)]
    pub extra_gdb_commands: Vec<String>,
    /// Applied last, overriding anything the Proton environment set
    #[serde(default)]
    pub extra_env: BTreeMap<String, String>,
    /// How long attach mode waits for the game process to show up (seconds)
    #[serde(default = "default_attach_timeout")]
    pub attach_timeout_secs: f64,
}

fn default_debugger() -> String {
    "gdb".to_string()
}

fn default_wine_reload_url() -> String {
    DEFAULT_WINE_RELOAD_URL.to_string()
}

fn default_attach_timeout() -> f64 {
    3.0
}

/// Longest wait attach mode accepts (seconds)
pub const MAX_ATTACH_TIMEOUT_SECS: f64 = 600.0;

impl Default for ProtonGdbConfig {
    fn default() -> Self {
        ProtonGdbConfig {
            debugger: default_debugger(),
            debugger_args: Vec::new(),
            proton: None,
            steam_path: None,
            wine_reload_url: default_wine_reload_url(),
            extra_gdb_commands: Vec::new(),
            extra_env: BTreeMap::new(),
            attach_timeout_secs: default_attach_timeout(),
        }
    }
}

impl ProtonGdbConfig {
    /// Clamp values a hand-edited settings file may have broken
    pub fn sanitize(&mut self) {
        if self.debugger.trim().is_empty() {
            self.debugger = default_debugger();
        }
        if !self.attach_timeout_secs.is_finite() || self.attach_timeout_secs <= 0.0 {
            self.attach_timeout_secs = default_attach_timeout();
        }
        self.attach_timeout_secs = self.attach_timeout_secs.min(MAX_ATTACH_TIMEOUT_SECS);
        self.proton = self.proton.take().filter(|p| !p.trim().is_empty());
        self.steam_path = self.steam_path.take().filter(|p| !p.trim().is_empty());
    }

    /// `attach_timeout_secs` as a duration, the default when it can't be one
    pub fn attach_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.attach_timeout_secs.min(MAX_ATTACH_TIMEOUT_SECS))
            .unwrap_or_else(|_| Duration::from_secs_f64(default_attach_timeout()))
    }
}
