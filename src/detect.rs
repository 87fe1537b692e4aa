//! Platform shell discovery for auto-detected profiles.
//!
//! Scans the platform's conventional locations for installed shells and
//! presents each as a launchable local profile. Detection never validates
//! that a shell actually runs, only that the file exists.

use crate::profile::LocalProfile;

/// Source of auto-detected local profiles.
pub trait ShellScanner: Send + Sync {
    /// Scan the platform for launchable shells.
    fn scan(&self) -> Vec<LocalProfile>;

    /// Drop any cached scan results.
    ///
    /// Called after a selection is persisted so the next pick reflects it.
    fn refresh(&self) {}
}

/// Scans conventional shell locations on the current platform.
///
/// On Unix this reads `/etc/shells` (plus `$SHELL` when it is missing from
/// the list); on Windows it probes well-known PowerShell and cmd locations.
/// Results are deduplicated by profile name, first occurrence wins.
#[derive(Debug, Default)]
pub struct PlatformShellScanner;

impl PlatformShellScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }
}

impl ShellScanner for PlatformShellScanner {
    fn scan(&self) -> Vec<LocalProfile> {
        let mut profiles: Vec<LocalProfile> = shell_paths()
            .iter()
            .filter_map(|path| profile_for_path(path))
            .collect();
        dedup_by_name(&mut profiles);
        log::debug!("detected {} shell profiles", profiles.len());
        profiles
    }
}

/// Candidate shell paths for the current platform.
fn shell_paths() -> Vec<String> {
    #[cfg(target_os = "windows")]
    {
        let mut paths = Vec::new();
        if let Ok(system_root) = std::env::var("SystemRoot") {
            paths.push(format!(
                "{system_root}\\System32\\WindowsPowerShell\\v1.0\\powershell.exe"
            ));
            paths.push(format!("{system_root}\\System32\\cmd.exe"));
        }
        // PowerShell 7 installs outside the system root
        paths.push("C:\\Program Files\\PowerShell\\7\\pwsh.exe".to_string());
        paths
    }
    #[cfg(not(target_os = "windows"))]
    {
        let mut paths = match std::fs::read_to_string("/etc/shells") {
            Ok(contents) => parse_etc_shells(&contents),
            Err(e) => {
                log::warn!("could not read /etc/shells: {e}");
                Vec::new()
            }
        };

        // The login shell may not be listed, e.g. on minimal systems
        if let Ok(shell) = std::env::var("SHELL")
            && !shell.is_empty()
            && !paths.contains(&shell)
        {
            paths.push(shell);
        }
        paths
    }
}

/// Parse `/etc/shells` contents into absolute shell paths.
///
/// Skips blank lines and `#` comments; keeps only absolute paths.
#[cfg(not(target_os = "windows"))]
fn parse_etc_shells(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.starts_with('/'))
        .map(String::from)
        .collect()
}

/// Build an auto-detected profile for `path`, or `None` when the file is
/// absent. The profile name is the executable's file stem.
fn profile_for_path(path: &str) -> Option<LocalProfile> {
    let fs_path = std::path::Path::new(path);
    if !fs_path.exists() {
        return None;
    }
    let name = fs_path.file_stem()?.to_string_lossy().to_string();
    Some(LocalProfile::new(name, path).auto_detected(true))
}

/// Remove profiles whose name already appeared earlier in the list.
fn dedup_by_name(profiles: &mut Vec<LocalProfile>) {
    let mut seen = std::collections::HashSet::new();
    profiles.retain(|p| seen.insert(p.profile_name.clone()));
}
