//! wine-reload helper download

use std::error::Error;
use std::path::{Path, PathBuf};

/// Path to a usable wine-reload script, downloading it into `cache` on first
/// use. Debugging still works without it, so failures only warn.
pub fn ensure_wine_reload(url: &str, cache: &Path) -> Option<PathBuf> {
    if cache.is_file() {
        return Some(cache.to_path_buf());
    }
    if url.is_empty() {
        log::info!("wine-reload download disabled");
        return None;
    }

    match download(url, cache) {
        Ok(()) => {
            log::info!("Saved wine-reload to {}", cache.display());
            Some(cache.to_path_buf())
        }
        Err(e) => {
            log::warn!("Couldn't fetch wine-reload from {}: {}", url, e);
            None
        }
    }
}

fn download(url: &str, dest: &Path) -> Result<(), Box<dyn Error>> {
    let response = reqwest::blocking::Client::new()
        .get(url)
        .header("User-Agent", "protongdb")
        .send()?
        .error_for_status()?;
    let body = response.bytes()?;

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // A partial download must never look like a cached script
    let partial = dest.with_extension("part");
    std::fs::write(&partial, &body)?;
    std::fs::rename(&partial, dest)?;
    Ok(())
}
