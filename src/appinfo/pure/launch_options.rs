// Launch option extraction (pure)

use crate::appinfo::types::{LaunchOption, Value};

/// Collect the launch configurations Proton can run.
///
/// Accepts either the decoded entry root (holding `appinfo`) or the
/// `appinfo` node itself. Entries restricted to other OSes and entries
/// without an executable are dropped.
pub fn windows_launch_options(root: &Value) -> Vec<LaunchOption> {
    let appinfo = root.get("appinfo").unwrap_or(root);
    let Some(launch) = appinfo.path(&["config", "launch"]) else {
        return Vec::new();
    };

    launch
        .entries()
        .iter()
        .filter_map(|(_, entry)| {
            if !runs_on_windows(entry) {
                return None;
            }
            let executable = entry.get("executable").and_then(Value::as_str)?;
            let executable = normalize_path(executable);
            if executable.is_empty() {
                return None;
            }

            let working_dir = entry
                .get("workingdir")
                .and_then(Value::as_str)
                .map(normalize_path)
                .filter(|dir| !dir.is_empty());

            let arguments = entry
                .get("arguments")
                .and_then(Value::as_str)
                .map(|args| args.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default();

            Some(LaunchOption {
                description: entry
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                executable,
                working_dir,
                beta_key: entry
                    .path(&["config", "betakey"])
                    .and_then(Value::as_str)
                    .map(str::to_string),
                arguments,
            })
        })
        .collect()
}

fn runs_on_windows(entry: &Value) -> bool {
    match entry.path(&["config", "oslist"]).and_then(Value::as_str) {
        Some(oslist) => oslist.split(',').any(|os| os.trim() == "windows"),
        None => true,
    }
}

/// Steam stores Windows-style separators
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Value {
        Value::Str(v.to_string())
    }

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    fn app(launch: Vec<(&str, Value)>) -> Value {
        map(vec![(
            "appinfo",
            map(vec![("config", map(vec![("launch", map(launch))]))]),
        )])
    }

    #[test]
    fn keeps_windows_and_unrestricted_entries() {
        let root = app(vec![
            ("0", map(vec![("executable", s("hl2.exe"))])),
            (
                "1",
                map(vec![
                    ("executable", s("hl2_linux")),
                    ("config", map(vec![("oslist", s("linux"))])),
                ]),
            ),
            (
                "2",
                map(vec![
                    ("executable", s("bin\\win64\\tf.exe")),
                    ("config", map(vec![("oslist", s("windows,macos"))])),
                ]),
            ),
        ]);

        let options = windows_launch_options(&root);
        let exes: Vec<&str> = options.iter().map(|o| o.executable.as_str()).collect();
        assert_eq!(exes, vec!["hl2.exe", "bin/win64/tf.exe"]);
    }

    #[test]
    fn reads_arguments_working_dir_and_beta() {
        let root = app(vec![(
            "0",
            map(vec![
                ("executable", s("Game\\Binaries\\Game.exe")),
                ("arguments", s("-dx11  -novid")),
                ("workingdir", s("Game\\Binaries")),
                ("description", s("Launch (DX11)")),
                ("config", map(vec![("betakey", s("public_test"))])),
            ]),
        )]);

        let options = windows_launch_options(&root);
        assert_eq!(
            options,
            vec![LaunchOption {
                description: Some("Launch (DX11)".to_string()),
                executable: "Game/Binaries/Game.exe".to_string(),
                working_dir: Some("Game/Binaries".to_string()),
                beta_key: Some("public_test".to_string()),
                arguments: vec!["-dx11".to_string(), "-novid".to_string()],
            }]
        );
    }

    #[test]
    fn entries_without_executable_are_skipped() {
        let root = app(vec![("0", map(vec![("description", s("Manual"))]))]);
        assert!(windows_launch_options(&root).is_empty());
    }

    #[test]
    fn missing_launch_section_yields_nothing() {
        let root = map(vec![("appinfo", map(vec![]))]);
        assert!(windows_launch_options(&root).is_empty());
    }

    #[test]
    fn menu_line_shows_args_and_beta() {
        let option = LaunchOption {
            description: Some("Play".to_string()),
            executable: "game.exe".to_string(),
            beta_key: Some("beta".to_string()),
            arguments: vec!["-windowed".to_string()],
            ..Default::default()
        };
        assert_eq!(
            option.menu_line(1),
            "[1] Play (game.exe -windowed) | Beta: beta |"
        );
    }
}
