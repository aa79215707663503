// gdb startup script (pure)

use std::path::Path;

/// Commands gdb runs before handing control to the user.
///
/// Wine uses SIGUSR1 for thread suspension and SIGSYS for syscall
/// emulation; both would otherwise stop the inferior constantly.
pub fn gdb_commands(wine_reload: Option<&Path>, extra: &[String]) -> Vec<String> {
    let mut commands = vec![
        "set confirm off".to_string(),
        "set pagination off".to_string(),
        "handle SIGUSR1 noprint nostop".to_string(),
        "handle SIGSYS noprint nostop".to_string(),
    ];
    if let Some(script) = wine_reload {
        commands.push(format!("source {}", script.display()));
    }
    commands.extend(extra.iter().cloned());
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_wine_reload_when_available() {
        let commands = gdb_commands(Some(Path::new("/data/winereload.py")), &[]);
        assert_eq!(commands.last().unwrap(), "source /data/winereload.py");
        assert!(commands.contains(&"handle SIGSYS noprint nostop".to_string()));
    }

    #[test]
    fn extra_commands_come_last() {
        let extra = vec!["break abort".to_string()];
        let commands = gdb_commands(None, &extra);
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[4], "break abort");
        assert!(!commands.iter().any(|c| c.starts_with("source")));
    }
}
