//! Executable-relative path resolution.
//!
//! Resolved per call from the OS rather than cached in process-wide state,
//! so failures surface to the caller.

use std::io;
use std::path::{Path, PathBuf};

/// Directory containing the running binary.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })
}

/// Path of a file sitting next to the running binary.
pub fn executable_sibling(name: &str) -> io::Result<PathBuf> {
    Ok(executable_dir()?.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_dir_exists() {
        let dir = executable_dir().unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_sibling_is_inside_executable_dir() {
        let sibling = executable_sibling("data.json").unwrap();
        assert_eq!(sibling.parent().unwrap(), executable_dir().unwrap());
        assert_eq!(sibling.file_name().unwrap(), "data.json");
    }
}
