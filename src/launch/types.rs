use std::path::PathBuf;
use std::time::Duration;

/// How gdb gets hold of the game
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaunchMode {
    /// gdb starts the Wine loader, which starts the game
    #[default]
    Wrap,
    /// Wine starts the game on its own and gdb attaches to it by pid
    Attach,
}

/// One invocation of the launcher
#[derive(Clone, Debug)]
pub struct LaunchRequest {
    pub app_id: u32,
    /// Appended after the launch configuration's own arguments
    pub app_args: Vec<String>,
    pub mode: LaunchMode,
    /// Launch configuration index; asked interactively when None and
    /// there's more than one
    pub launch_option: Option<usize>,
    pub assume_yes: bool,
    pub dry_run: bool,
    /// Where the per-run gdb script is written
    pub script_dir: PathBuf,
    /// Cached wine-reload location
    pub wine_reload_cache: PathBuf,
    pub attach_timeout: Duration,
}

/// The Windows executable to run and how
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchTarget {
    pub executable: PathBuf,
    pub working_dir: PathBuf,
    pub args: Vec<String>,
}
