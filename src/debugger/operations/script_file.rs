//! Temporary gdb script handling

use std::io::Write;
use std::path::{Path, PathBuf};

/// A gdb script on disk, deleted when dropped
#[derive(Debug)]
pub struct ScriptFile {
    path: PathBuf,
}

impl ScriptFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScriptFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::debug!("Couldn't remove {}: {}", self.path.display(), e);
        }
    }
}

/// Where this process keeps its gdb script inside `dir`
pub fn script_path(dir: &Path) -> PathBuf {
    dir.join(format!(".protongdb_args-{}", std::process::id()))
}

/// Write `commands` one per line to a per-process file in `dir`
pub fn write_script(dir: &Path, commands: &[String]) -> std::io::Result<ScriptFile> {
    std::fs::create_dir_all(dir)?;
    let path = script_path(dir);
    let mut file = std::fs::File::create(&path)?;
    for command in commands {
        writeln!(file, "{}", command)?;
    }
    log::info!("Wrote gdb script to {}", path.display());
    Ok(ScriptFile { path })
}
