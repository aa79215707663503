// config_info parsing (pure)

use std::path::PathBuf;

/// Proton install directories named by a prefix's `config_info`.
///
/// Proton writes its version on the first line and then paths inside its
/// own tree (`.../Proton 9.0/files/share/fonts/`). Each such path is cut
/// back to the Proton directory. Order is kept and duplicates dropped.
pub fn proton_dirs_from_config_info(content: &str) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for line in content.lines().skip(1) {
        let line = line.trim();
        if !line.starts_with('/') {
            continue;
        }
        let cut = ["/files/", "/dist/"]
            .iter()
            .filter_map(|marker| line.rfind(marker))
            .max();
        if let Some(idx) = cut {
            let dir = PathBuf::from(&line[..idx]);
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
    }
    dirs
}
