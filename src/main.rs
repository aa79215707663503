mod appinfo;
mod config;
mod debugger;
mod error;
mod launch;
mod paths;
mod platform;
mod proton;

use std::io::Write;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::LevelFilter;

use crate::config::{load_cfg, save_cfg};
use crate::launch::{LaunchMode, LaunchRequest, StdinPrompt, SystemRunner, launch_game};
use crate::paths::{PATH_DATA, PATH_RUNTIME, PATH_WINE_RELOAD};
use crate::platform::SteamResolver;

#[derive(Debug, Parser)]
#[command(
    name = "protongdb",
    version,
    about = "Wrapper for debugging Steam Play/Proton games with GDB.",
    after_help = "When you experience a crash, run 'wine-reload' in gdb before trying to get a backtrace."
)]
struct Cli {
    /// Print debug information
    #[arg(short, long)]
    verbose: bool,

    /// Let Wine start the game and attach gdb to it afterwards
    #[arg(long)]
    attach: bool,

    /// Don't ask for confirmation before launching
    #[arg(short, long)]
    yes: bool,

    /// Print the resolved command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Launch configuration to use when the game has several
    #[arg(short, long, value_name = "N")]
    launch_option: Option<usize>,

    /// Proton build to use instead of the prefix's own (directory name or path)
    #[arg(long, value_name = "NAME|PATH")]
    proton: Option<String>,

    /// Write settings.json with every option filled in, then exit
    #[arg(long)]
    init_config: bool,

    /// Steam app id of the game
    appid: Option<u32>,

    /// Extra arguments for the game
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    app_args: Vec<String>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "protongdb ({}): {}",
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.init_config {
        return match save_cfg(&load_cfg()) {
            Ok(()) => {
                println!("Wrote {}", PATH_DATA.join("settings.json").display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to write settings: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let Some(app_id) = cli.appid else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let cfg = load_cfg();
    let resolver = SteamResolver::new(&cfg, cli.proton.clone());

    let request = LaunchRequest {
        app_id,
        app_args: cli.app_args,
        mode: if cli.attach {
            LaunchMode::Attach
        } else {
            LaunchMode::Wrap
        },
        launch_option: cli.launch_option,
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
        script_dir: PATH_RUNTIME.clone(),
        wine_reload_cache: PATH_WINE_RELOAD.clone(),
        attach_timeout: cfg.attach_timeout(),
    };

    let mut runner = SystemRunner::default();
    match launch_game(&resolver, &mut runner, &mut StdinPrompt, &cfg, &request) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn app_args_take_hyphenated_values() {
        let cli = Cli::try_parse_from(["protongdb", "-y", "440", "-novid", "+map", "ctf_2fort"])
            .unwrap();
        assert_eq!(cli.appid, Some(440));
        assert!(cli.yes);
        assert_eq!(cli.app_args, vec!["-novid", "+map", "ctf_2fort"]);
    }

    #[test]
    fn appid_is_optional() {
        let cli = Cli::try_parse_from(["protongdb", "--attach"]).unwrap();
        assert_eq!(cli.appid, None);
        assert!(cli.attach);
    }

    #[test]
    fn non_numeric_appid_is_rejected() {
        assert!(Cli::try_parse_from(["protongdb", "tf2"]).is_err());
    }
}
