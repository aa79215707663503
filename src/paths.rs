use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| env::var_os("HOME").map(PathBuf::from).unwrap_or_else(env::temp_dir));

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// Data directory holding settings.json and the cached wine-reload script
pub static PATH_DATA: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("protongdb");
    }
    PATH_LOCAL_SHARE.join("protongdb")
});

/// Scratch directory for per-run gdb scripts
pub static PATH_RUNTIME: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_runtime) = env::var("XDG_RUNTIME_DIR") {
        return PathBuf::from(xdg_runtime).join("protongdb");
    }
    env::temp_dir().join("protongdb")
});

/// Cached copy of the wine-reload gdb helper
pub static PATH_WINE_RELOAD: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_DATA.join("winereload.py"));
