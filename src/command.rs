//! External-command discovery.

use std::path::{Path, PathBuf};

/// Whether `name` resolves to an executable on the search path.
pub fn command_exists(name: &str) -> bool {
    find_command(name).is_some()
}

/// Resolve `name` to the full path of an executable, if any.
///
/// Mirrors the shell's lookup: a name containing a path separator is
/// checked directly, anything else is searched for in each `PATH` entry.
/// On Windows the `PATHEXT` extensions are tried as well.
pub fn find_command(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return executable_at(candidate);
    }
    let path = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        if let Some(found) = executable_at(&dir.join(name)) {
            return Some(found);
        }
    }
    None
}

#[cfg(unix)]
fn executable_at(path: &Path) -> Option<PathBuf> {
    use std::os::unix::fs::PermissionsExt;
    let meta = std::fs::metadata(path).ok()?;
    if meta.is_file() && meta.permissions().mode() & 0o111 != 0 {
        Some(path.to_path_buf())
    } else {
        None
    }
}

#[cfg(windows)]
fn executable_at(path: &Path) -> Option<PathBuf> {
    if path.extension().is_some() && path.is_file() {
        return Some(path.to_path_buf());
    }
    // PATHEXT lists the extensions the shell treats as executable.
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    for ext in exts.split(';').filter(|e| !e.is_empty()) {
        let with_ext = PathBuf::from(format!("{}{}", path.display(), ext.to_lowercase()));
        if with_ext.is_file() {
            return Some(with_ext);
        }
    }
    None
}
