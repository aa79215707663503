//! Finding Proton builds on disk

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::proton::pure::config_info::proton_dirs_from_config_info;
use crate::proton::pure::tool_names::{declared_tool_name, official_internal_name};
use crate::proton::types::ProtonApp;

/// Treat `dir` as a Proton install if it ships a Wine loader
pub fn proton_from_dir(dir: &Path) -> Option<ProtonApp> {
    let dist_dir = ["files", "dist"]
        .into_iter()
        .find(|d| dir.join(d).join("bin/wine").is_file())?;
    let name = dir.file_name()?.to_string_lossy().into_owned();
    Some(ProtonApp {
        name,
        install_path: dir.to_path_buf(),
        dist_dir,
        app_id: None,
    })
}

/// The Proton build that last ran in this compatdata directory
pub fn proton_from_config_info(compat_data: &Path) -> Option<ProtonApp> {
    let content = std::fs::read_to_string(compat_data.join("config_info")).ok()?;
    proton_dirs_from_config_info(&content)
        .iter()
        .find_map(|dir| proton_from_dir(dir))
}

/// Directories Proton builds may live in: every library's common folder,
/// then Steam's compatibilitytools.d
fn tool_dirs(library_folders: &[PathBuf], steam_root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = library_folders
        .iter()
        .map(|lib| lib.join("steamapps/common"))
        .collect();
    dirs.push(steam_root.join("compatibilitytools.d"));
    dirs
}

fn child_dirs(dir: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
}

/// Resolve a Proton build from a directory name (e.g. "Proton - Experimental")
/// or a full path
pub fn resolve_proton_path(
    proton_name: &str,
    library_folders: &[PathBuf],
    steam_root: &Path,
) -> Option<ProtonApp> {
    // If it's already a full path, use it directly
    let as_path = Path::new(proton_name);
    if as_path.is_absolute() {
        // Maybe they pointed at the proton script itself
        if as_path.file_name().map(|n| n == "proton").unwrap_or(false) {
            return as_path.parent().and_then(proton_from_dir);
        }
        return proton_from_dir(as_path);
    }

    tool_dirs(library_folders, steam_root)
        .iter()
        .flat_map(|dir| child_dirs(dir))
        .filter(|dir| {
            dir.file_name()
                .map(|n| n.to_string_lossy().eq_ignore_ascii_case(proton_name))
                .unwrap_or(false)
        })
        .find_map(|dir| proton_from_dir(&dir))
}

/// Find the Proton build Steam knows by `internal_name` (as stored in its
/// compat tool mapping)
pub fn find_compat_tool(
    internal_name: &str,
    library_folders: &[PathBuf],
    steam_root: &Path,
) -> Option<ProtonApp> {
    // Custom tools declare their name in compatibilitytool.vdf
    for dir in child_dirs(&steam_root.join("compatibilitytools.d")) {
        let declared = std::fs::read_to_string(dir.join("compatibilitytool.vdf"))
            .ok()
            .and_then(|vdf| declared_tool_name(&vdf));
        let dir_name = dir.file_name().map(|n| n.to_string_lossy().into_owned());
        if declared.as_deref() == Some(internal_name) || dir_name.as_deref() == Some(internal_name)
        {
            if let Some(proton) = proton_from_dir(&dir) {
                return Some(proton);
            }
        }
    }

    // Official builds are plain Steam apps under steamapps/common
    library_folders
        .iter()
        .flat_map(|lib| child_dirs(&lib.join("steamapps/common")))
        .filter(|dir| {
            dir.file_name()
                .and_then(|n| official_internal_name(&n.to_string_lossy()))
                .as_deref()
                == Some(internal_name)
        })
        .find_map(|dir| proton_from_dir(&dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fake_proton(dir: &Path, dist: &str) {
        fs::create_dir_all(dir.join(dist).join("bin")).unwrap();
        fs::write(dir.join(dist).join("bin/wine"), "").unwrap();
    }

    #[test]
    fn directory_without_wine_is_not_proton() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("Proton 9.0/files")).unwrap();
        assert_eq!(proton_from_dir(&tmp.path().join("Proton 9.0")), None);
    }

    #[test]
    fn detects_old_dist_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Proton 4.11");
        fake_proton(&dir, "dist");
        let proton = proton_from_dir(&dir).unwrap();
        assert_eq!(proton.name, "Proton 4.11");
        assert_eq!(proton.wine_bin(), dir.join("dist/bin/wine"));
    }

    #[test]
    fn config_info_points_at_proton() {
        let tmp = tempfile::tempdir().unwrap();
        let proton_dir = tmp.path().join("steamapps/common/Proton 8.0");
        fake_proton(&proton_dir, "files");
        let compat = tmp.path().join("steamapps/compatdata/440");
        fs::create_dir_all(&compat).unwrap();
        fs::write(
            compat.join("config_info"),
            format!("8.0-5\n{}/files/share/fonts/\n", proton_dir.display()),
        )
        .unwrap();

        let proton = proton_from_config_info(&compat).unwrap();
        assert_eq!(proton.install_path, proton_dir);
    }

    #[test]
    fn resolves_name_case_insensitively_across_libraries() {
        let tmp = tempfile::tempdir().unwrap();
        let steam = tmp.path().join("steam");
        let lib = tmp.path().join("library");
        fake_proton(&lib.join("steamapps/common/Proton - Experimental"), "files");
        fs::create_dir_all(steam.join("steamapps/common")).unwrap();

        let proton =
            resolve_proton_path("proton - experimental", &[steam.clone(), lib.clone()], &steam)
                .unwrap();
        assert_eq!(proton.name, "Proton - Experimental");
    }

    #[test]
    fn resolves_absolute_path_to_proton_script() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("GE-Proton9-20");
        fake_proton(&dir, "files");
        let script = dir.join("proton");
        let proton = resolve_proton_path(&script.to_string_lossy(), &[], tmp.path()).unwrap();
        assert_eq!(proton.install_path, dir);
    }

    #[test]
    fn compat_tool_found_by_declared_name() {
        let tmp = tempfile::tempdir().unwrap();
        let steam = tmp.path().to_path_buf();
        let dir = steam.join("compatibilitytools.d/ge-proton-latest");
        fake_proton(&dir, "files");
        fs::write(
            dir.join("compatibilitytool.vdf"),
            "\"compatibilitytools\" { \"compat_tools\" { \"GE-Proton9-20\" { } } }",
        )
        .unwrap();

        let proton = find_compat_tool("GE-Proton9-20", &[steam.clone()], &steam).unwrap();
        assert_eq!(proton.install_path, dir);
    }

    #[test]
    fn compat_tool_found_by_official_name() {
        let tmp = tempfile::tempdir().unwrap();
        let steam = tmp.path().to_path_buf();
        fake_proton(&steam.join("steamapps/common/Proton 9.0"), "files");
        fake_proton(&steam.join("steamapps/common/Proton 8.0"), "files");

        let proton = find_compat_tool("proton_8", &[steam.clone()], &steam).unwrap();
        assert_eq!(proton.name, "Proton 8.0");
        assert!(find_compat_tool("proton_7", &[steam.clone()], &steam).is_none());
    }
}
