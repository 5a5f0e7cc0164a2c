//! Platform capability selection.
//!
//! OS-specific behavior (where config files live, how child processes are
//! forcefully terminated) is chosen once at startup and carried in a
//! [`Platform`] value, instead of being branched at every call site.

use std::io;
use std::path::PathBuf;
use std::process::Child;

/// Where per-application config files live on this platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigRoot {
    /// XDG-style layout under the invoking user's home: `~/.config/<app>/`.
    XdgHome(PathBuf),
    /// Config files sit next to the running executable.
    ExecutableDir,
}

/// How child processes are forcefully terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillStyle {
    /// Deliver SIGKILL through the signal API.
    #[cfg(unix)]
    Signal,
    /// Use the process handle's kill call.
    Api,
}

/// Capabilities selected for the current platform.
///
/// Construct once with [`Platform::detect`] and pass it to whatever needs
/// platform-dependent behavior.
#[derive(Debug, Clone)]
pub struct Platform {
    config_root: ConfigRoot,
    kill: KillStyle,
}

impl Platform {
    /// Select capabilities for the current OS.
    pub fn detect() -> Self {
        Self {
            config_root: detect_config_root(),
            kill: detect_kill_style(),
        }
    }

    /// Platform with an explicit config root. Kill style is still detected.
    pub fn with_config_root(config_root: ConfigRoot) -> Self {
        Self {
            config_root,
            kill: detect_kill_style(),
        }
    }

    /// The selected config root.
    pub fn config_root(&self) -> &ConfigRoot {
        &self.config_root
    }

    /// Resolve the path of `app`'s config file named `filename`.
    ///
    /// `<home>/.config/<app>/<filename>` under an XDG home; next to the
    /// running binary otherwise.
    pub fn config_path(&self, app: &str, filename: &str) -> io::Result<PathBuf> {
        match &self.config_root {
            ConfigRoot::XdgHome(home) => Ok(home.join(".config").join(app).join(filename)),
            ConfigRoot::ExecutableDir => crate::paths::executable_sibling(filename),
        }
    }

    /// Forcefully terminate a child process using the selected style.
    pub fn kill_child(&self, child: &mut Child) -> io::Result<()> {
        match self.kill {
            #[cfg(unix)]
            KillStyle::Signal => {
                use nix::sys::signal::{kill, Signal};
                use nix::unistd::Pid;
                kill(Pid::from_raw(child.id() as i32), Signal::SIGKILL).map_err(io::Error::from)
            }
            KillStyle::Api => child.kill(),
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_config_root() -> ConfigRoot {
    match invoking_home() {
        Some(home) => ConfigRoot::XdgHome(home),
        None => {
            tracing::warn!("no home directory found, keeping config next to the executable");
            ConfigRoot::ExecutableDir
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn detect_config_root() -> ConfigRoot {
    ConfigRoot::ExecutableDir
}

/// Home of the user who launched us.
///
/// When running as root under sudo, the invoking user's home wins so
/// config files don't land in `/root`.
#[cfg(target_os = "linux")]
fn invoking_home() -> Option<PathBuf> {
    if nix::unistd::Uid::effective().is_root() {
        if let Ok(user) = std::env::var("SUDO_USER") {
            if !user.is_empty() {
                return Some(PathBuf::from(format!("/home/{user}")));
            }
        }
    }
    dirs::home_dir()
}

fn detect_kill_style() -> KillStyle {
    #[cfg(unix)]
    {
        KillStyle::Signal
    }
    #[cfg(not(unix))]
    {
        KillStyle::Api
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_under_xdg_home() {
        let platform =
            Platform::with_config_root(ConfigRoot::XdgHome(PathBuf::from("/home/alice")));
        let path = platform.config_path("mytool", "settings.json").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/alice/.config/mytool/settings.json")
        );
    }

    #[test]
    fn test_config_path_next_to_executable() {
        let platform = Platform::with_config_root(ConfigRoot::ExecutableDir);
        let path = platform.config_path("mytool", "settings.json").unwrap();
        assert_eq!(
            path.parent().unwrap(),
            crate::paths::executable_dir().unwrap()
        );
        assert_eq!(path.file_name().unwrap(), "settings.json");
    }

    #[test]
    fn test_detect_yields_usable_root() {
        let platform = Platform::detect();
        assert!(platform.config_path("mytool", "c.json").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_kill_child_terminates_sleeping_process() {
        let mut child = std::process::Command::new("sleep")
            .arg("30")
            .spawn()
            .unwrap();
        let platform = Platform::detect();
        platform.kill_child(&mut child).unwrap();
        let status = child.wait().unwrap();
        assert!(!status.success());
    }
}
