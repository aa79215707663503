use std::collections::BTreeMap;
use std::path::PathBuf;

/// An installed Proton build
#[derive(Clone, Debug, PartialEq)]
pub struct ProtonApp {
    /// Directory name, e.g. "Proton 9.0" or "GE-Proton9-20"
    pub name: String,
    pub install_path: PathBuf,
    /// `files` for current builds, `dist` for pre-5.13 ones
    pub dist_dir: &'static str,
    /// Steam appid for builds installed as Steam apps; custom builds have none
    pub app_id: Option<u32>,
}

impl ProtonApp {
    /// Root of the bundled Wine (bin/, lib/, lib64/)
    pub fn dist_path(&self) -> PathBuf {
        self.install_path.join(self.dist_dir)
    }

    /// Wine loader used to start the game
    pub fn wine_bin(&self) -> PathBuf {
        self.dist_path().join("bin/wine")
    }

    /// Name plus appid, or plus install path for builds Steam didn't install
    pub fn label(&self) -> String {
        match self.app_id {
            Some(id) => format!("{} ({})", self.name, id),
            None => format!("{} ({})", self.name, self.install_path.display()),
        }
    }
}

/// Everything the launcher needs to run inside a game's prefix.
///
/// Built once by the resolver side and only ever borrowed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixContext {
    /// `compatdata/<appid>/pfx`
    pub prefix_path: PathBuf,
    pub compat_data_path: PathBuf,
    pub env: BTreeMap<String, String>,
}
