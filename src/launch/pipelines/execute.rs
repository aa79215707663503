//! Game execution pipeline

use std::collections::HashMap;
use std::process::Stdio;

use crate::appinfo::LaunchOption;
use crate::config::ProtonGdbConfig;
use crate::debugger::{ensure_wine_reload, gdb_commands, script_path, write_script};
use crate::error::{LaunchError, Result};
use crate::launch::operations::{ProcessRunner, Prompt};
use crate::launch::pure::{
    attach_command, confirmed, format_launch_cmd, launch_target, parse_selection, wine_command,
    wrapped_command,
};
use crate::launch::types::{LaunchMode, LaunchRequest, LaunchTarget};
use crate::platform::{PrefixResolver, ResolvedApp};

const RULE: &str = "--------------------------------------------";

/// Resolve `request.app_id` and run it under the debugger.
///
/// Returns the debugger's exit code, or 0 when the user backs out at the
/// confirmation prompt. Nothing is spawned unless resolution succeeds.
pub fn launch_game(
    resolver: &dyn PrefixResolver,
    runner: &mut dyn ProcessRunner,
    prompt: &mut dyn Prompt,
    cfg: &ProtonGdbConfig,
    request: &LaunchRequest,
) -> Result<i32> {
    let resolved = resolver.resolve(request.app_id)?;
    log::info!(
        "Prefix data in {}",
        resolved.prefix.compat_data_path.display()
    );

    let option = select_launch_option(&resolved.launch_options, request.launch_option, prompt)?;
    let target = launch_target(&resolved.game, option, &request.app_args);

    print_summary(&resolved, &target);

    if request.dry_run {
        println!("{}", dry_run_text(cfg, request, &resolved, &target));
        return Ok(0);
    }

    if !request.assume_yes {
        let answer = prompt.ask("This all look good? Ready to start debugging? [Y/n] ")?;
        if !confirmed(&answer) {
            log::info!("Cancelled by user");
            return Ok(0);
        }
    }

    let wine_reload = ensure_wine_reload(&cfg.wine_reload_url, &request.wine_reload_cache);
    let commands = gdb_commands(wine_reload.as_deref(), &cfg.extra_gdb_commands);
    // Removed when dropped at the end of this function
    let script = write_script(&request.script_dir, &commands)?;

    match request.mode {
        LaunchMode::Wrap => {
            let cmd = wrapped_command(
                &cfg.debugger,
                &cfg.debugger_args,
                script.path(),
                &resolved.proton,
                &target,
                &resolved.prefix,
            );
            log::info!("Running {:?}", cmd);
            runner.run(cmd)
        }
        LaunchMode::Attach => {
            let mut game = wine_command(&resolved.proton, &target, &resolved.prefix);
            game.stdin(Stdio::null());
            let wine_pid = runner.spawn(game)?;

            let Some(pid) = runner.find_process(&target.executable, request.attach_timeout) else {
                runner.kill(wine_pid);
                return Err(LaunchError::AttachTimeout(
                    target.executable.display().to_string(),
                ));
            };
            log::info!("Attaching to pid {}", pid);

            let cmd = attach_command(&cfg.debugger, &cfg.debugger_args, script.path(), pid);
            // The game outlives a debugger that failed to start
            let result = runner.run(cmd);
            runner.kill(pid);
            result
        }
    }
}

/// Pick the launch configuration to run.
///
/// A single configuration is used as is; otherwise `requested` or an
/// interactive choice decides.
fn select_launch_option<'a>(
    options: &'a [LaunchOption],
    requested: Option<usize>,
    prompt: &mut dyn Prompt,
) -> Result<&'a LaunchOption> {
    if let Some(idx) = requested {
        return options.get(idx).ok_or(LaunchError::InvalidSelection);
    }
    if let [only] = options {
        return Ok(only);
    }

    for (idx, option) in options.iter().enumerate() {
        println!("{}", option.menu_line(idx));
    }
    let answer = prompt.ask("Select a game configuration to run: ")?;
    parse_selection(&answer, options.len())
        .and_then(|idx| options.get(idx))
        .ok_or(LaunchError::InvalidSelection)
}

fn print_summary(resolved: &ResolvedApp, target: &LaunchTarget) {
    println!("Proton: {}", resolved.proton.label());
    println!("App: {} ({})", resolved.game.name, resolved.game.app_id);
    println!("Using install dir: {}", resolved.game.install_path.display());
    println!(
        "Using Proton prefix: {}",
        resolved.prefix.prefix_path.display()
    );
    println!("{}", RULE);
    println!("Using working dir: {}", target.working_dir.display());
    println!("Using launch executable: {}", target.executable.display());
    println!("Using arguments: {}", target.args.join(" "));
    println!("{}", RULE);
    println!("When you experience a crash, run 'wine-reload' before trying to get a backtrace.");
}

/// The command a real run would start, with the variables it adds
fn dry_run_text(
    cfg: &ProtonGdbConfig,
    request: &LaunchRequest,
    resolved: &ResolvedApp,
    target: &LaunchTarget,
) -> String {
    let inherited: HashMap<String, String> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    let script = script_path(&request.script_dir);

    let cmd = match request.mode {
        LaunchMode::Wrap => wrapped_command(
            &cfg.debugger,
            &cfg.debugger_args,
            &script,
            &resolved.proton,
            target,
            &resolved.prefix,
        ),
        LaunchMode::Attach => wine_command(&resolved.proton, target, &resolved.prefix),
    };
    let mut text = format_launch_cmd(&cmd, &inherited);
    if request.mode == LaunchMode::Attach {
        text.push_str(&format!(
            "\nthen: {} -x {} -p <pid>",
            cfg.debugger,
            script.display()
        ));
    }
    text
}
