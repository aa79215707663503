// Pure command building functions (no I/O)

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::appinfo::LaunchOption;
use crate::launch::types::LaunchTarget;
use crate::platform::SteamGame;
use crate::proton::{PrefixContext, ProtonApp};

/// Proton's shim that sets up the Steam client environment before
/// starting the real executable
const STEAM_SHIM: &str = "steam.exe";

/// Linux keeps the first 15 bytes of a process name in `comm`
const COMM_LEN: usize = 15;

/// Resolve a launch configuration against the game's install dir
pub fn launch_target(game: &SteamGame, option: &LaunchOption, user_args: &[String]) -> LaunchTarget {
    let working_dir = match &option.working_dir {
        Some(dir) => game.install_path.join(dir),
        None => game.install_path.clone(),
    };
    let mut args = option.arguments.clone();
    args.extend(user_args.iter().cloned());

    LaunchTarget {
        executable: game.install_path.join(&option.executable),
        working_dir,
        args,
    }
}

fn apply_prefix(cmd: &mut Command, target: &LaunchTarget, ctx: &PrefixContext) {
    cmd.current_dir(&target.working_dir);
    cmd.envs(&ctx.env);
}

fn push_wine_args(cmd: &mut Command, target: &LaunchTarget) {
    cmd.arg(STEAM_SHIM);
    cmd.arg(&target.executable);
    cmd.args(&target.args);
}

/// `wine steam.exe <exe> <args>` inside the prefix
pub fn wine_command(proton: &ProtonApp, target: &LaunchTarget, ctx: &PrefixContext) -> Command {
    let mut cmd = Command::new(proton.wine_bin());
    push_wine_args(&mut cmd, target);
    apply_prefix(&mut cmd, target, ctx);
    cmd
}

/// `gdb -x <script> --args wine steam.exe <exe> <args>` inside the prefix
pub fn wrapped_command(
    debugger: &str,
    debugger_args: &[String],
    script: &Path,
    proton: &ProtonApp,
    target: &LaunchTarget,
    ctx: &PrefixContext,
) -> Command {
    let mut cmd = Command::new(debugger);
    cmd.args(debugger_args);
    cmd.arg("-x").arg(script);
    cmd.arg("--args").arg(proton.wine_bin());
    push_wine_args(&mut cmd, target);
    apply_prefix(&mut cmd, target, ctx);
    cmd
}

/// `gdb -x <script> -p <pid>`
pub fn attach_command(debugger: &str, debugger_args: &[String], script: &Path, pid: u32) -> Command {
    let mut cmd = Command::new(debugger);
    cmd.args(debugger_args);
    cmd.arg("-x").arg(script);
    cmd.arg("-p").arg(pid.to_string());
    cmd
}

/// Whether a `/proc/<pid>/comm` value names the process started from `executable`
pub fn comm_matches(comm: &[u8], executable: &Path) -> bool {
    let Some(name) = executable.file_name().map(OsStr::as_encoded_bytes) else {
        return false;
    };
    let expected = &name[..name.len().min(COMM_LEN)];
    let comm = comm.strip_suffix(b"\n").unwrap_or(comm);
    comm == expected
}

/// Format a launch command for display (pure string building).
///
/// Variables whose value equals `inherited` are left out. Returns the
/// formatted string. Caller is responsible for printing.
pub fn format_launch_cmd(cmd: &Command, inherited: &HashMap<String, String>) -> String {
    let mut output = String::new();

    let cwd = cmd.get_current_dir().unwrap_or_else(|| Path::new(""));
    output.push_str(&format!("CWD={}\n", cwd.display()));

    for (key, value) in cmd.get_envs() {
        let key = key.to_string_lossy();
        let value = value.map(|v| v.to_string_lossy()).unwrap_or_default();
        if inherited.get(&*key).map(String::as_str) == Some(&*value) {
            continue;
        }
        output.push_str(&format!("{}={}\n", key, value));
    }

    output.push_str(&format!("\"{}\"", cmd.get_program().display()));
    for arg in cmd.get_args() {
        let fmtarg = arg.to_string_lossy();
        if fmtarg == "--args" || fmtarg == STEAM_SHIM {
            output.push_str(" \\\n   ");
        } else {
            output.push(' ');
        }
        output.push_str(&format!("\"{}\"", fmtarg));
    }

    output
}
