//! Process lookup through /proc

use std::path::Path;

use crate::launch::pure::comm_matches;

/// Find a process started from `executable` by its `comm` name.
///
/// The most recently started match wins.
pub fn find_pid_by_exe(executable: &Path) -> Option<u32> {
    find_pid_in(Path::new("/proc"), executable)
}

fn find_pid_in(proc_root: &Path, executable: &Path) -> Option<u32> {
    let entries = std::fs::read_dir(proc_root).ok()?;

    entries
        .flatten()
        .filter_map(|entry| {
            let pid: u32 = entry.file_name().to_str()?.parse().ok()?;
            // Processes can exit between listing and reading
            let comm = std::fs::read(entry.path().join("comm")).ok()?;
            if !comm_matches(&comm, executable) {
                return None;
            }
            let started = std::fs::read_to_string(entry.path().join("stat"))
                .ok()
                .and_then(|stat| start_time(&stat))
                .unwrap_or(0);
            Some((started, pid))
        })
        .max()
        .map(|(_, pid)| pid)
}

/// Field 22 of `/proc/<pid>/stat`, in clock ticks since boot.
///
/// `comm` sits in parentheses and may itself contain spaces or parens, so
/// fields are counted from the last `)`.
fn start_time(stat: &str) -> Option<u64> {
    let rest = &stat[stat.rfind(')')? + 1..];
    rest.split_whitespace().nth(19)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat_line(pid: &str, comm: &str, started: u64) -> String {
        // pid (comm) state, then fields 4..=21 zeroed, then starttime
        let middle = vec!["0"; 18].join(" ");
        format!("{} ({}) S {} {} 0 0\n", pid, comm, middle, started)
    }

    fn fake_proc(root: &Path, pid: &str, comm: &str, started: u64) {
        let dir = root.join(pid);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("comm"), format!("{}\n", comm)).unwrap();
        std::fs::write(dir.join("stat"), stat_line(pid, comm, started)).unwrap();
    }

    #[test]
    fn finds_matching_pid() {
        let tmp = tempfile::tempdir().unwrap();
        fake_proc(tmp.path(), "100", "wineserver", 10);
        fake_proc(tmp.path(), "120", "hl2.exe", 50);
        std::fs::create_dir_all(tmp.path().join("self")).unwrap();

        assert_eq!(find_pid_in(tmp.path(), Path::new("/games/hl2.exe")), Some(120));
        assert_eq!(find_pid_in(tmp.path(), Path::new("/games/tf.exe")), None);
    }

    #[test]
    fn newest_instance_wins_over_older_one() {
        let tmp = tempfile::tempdir().unwrap();
        // Already running from an earlier session
        fake_proc(tmp.path(), "900", "hl2.exe", 100);
        // Just launched, pid wrapped around
        fake_proc(tmp.path(), "120", "hl2.exe", 5000);

        assert_eq!(find_pid_in(tmp.path(), Path::new("/games/hl2.exe")), Some(120));
    }

    #[test]
    fn start_time_skips_comm_with_spaces_and_parens() {
        let stat = stat_line("77", "Game (x) 64.exe", 31337);
        assert_eq!(start_time(&stat), Some(31337));
        assert_eq!(start_time("77 (truncated"), None);
    }
}
