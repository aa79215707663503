//! Spawning and reaping processes

use std::os::unix::process::ExitStatusExt;
use std::process::{Child, Command};
use std::time::{Duration, Instant};

use crate::error::{LaunchError, Result};

use super::procfs::find_pid_by_exe;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Process creation seam between the launch pipeline and the OS
pub trait ProcessRunner {
    /// Run to completion, returning the exit code
    fn run(&mut self, cmd: Command) -> Result<i32>;

    /// Start without waiting, returning the pid
    fn spawn(&mut self, cmd: Command) -> Result<u32>;

    /// Wait up to `timeout` for a process started from `executable`
    fn find_process(&mut self, executable: &std::path::Path, timeout: Duration) -> Option<u32>;

    fn kill(&mut self, pid: u32);
}

fn spawn_error(cmd: &Command, source: std::io::Error) -> LaunchError {
    LaunchError::Spawn {
        program: cmd.get_program().to_string_lossy().into_owned(),
        source,
    }
}

/// Runs commands for real
#[derive(Default)]
pub struct SystemRunner {
    children: Vec<Child>,
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, mut cmd: Command) -> Result<i32> {
        let status = cmd.status().map_err(|e| spawn_error(&cmd, e))?;
        // Shell convention for signal deaths
        Ok(status
            .code()
            .or_else(|| status.signal().map(|sig| 128 + sig))
            .unwrap_or(1))
    }

    fn spawn(&mut self, mut cmd: Command) -> Result<u32> {
        let child = cmd.spawn().map_err(|e| spawn_error(&cmd, e))?;
        let pid = child.id();
        log::info!("Started {} as pid {}", cmd.get_program().to_string_lossy(), pid);
        self.children.push(child);
        Ok(pid)
    }

    fn find_process(&mut self, executable: &std::path::Path, timeout: Duration) -> Option<u32> {
        // No deadline when the timeout doesn't fit in an Instant
        let deadline = Instant::now().checked_add(timeout);
        loop {
            if let Some(pid) = find_pid_by_exe(executable) {
                return Some(pid);
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return None;
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    fn kill(&mut self, pid: u32) {
        let Ok(raw) = libc::pid_t::try_from(pid) else {
            return;
        };
        // SAFETY: kill(2) has no memory-safety preconditions
        let ret = unsafe { libc::kill(raw, libc::SIGKILL) };
        if ret != 0 {
            log::warn!(
                "Failed to kill pid {}: {}",
                pid,
                std::io::Error::last_os_error()
            );
        }

        // Reap whatever already exited, leave the rest to init
        self.children
            .retain_mut(|child| !matches!(child.try_wait(), Ok(Some(_))));
    }
}
