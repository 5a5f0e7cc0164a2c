//! File and directory plumbing shared by the other modules.

use std::io;
use std::path::Path;

/// Recursively create a directory tree.
///
/// Created directories get mode 0700 on Unix; elsewhere the platform
/// default applies. An empty path is a no-op.
pub fn make_dir_tree(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path)
}

/// Create (or truncate) `path` and write `contents` to it.
pub fn write_text_file(path: &Path, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)
}

/// Copy `src` to `dst`, creating `dst`'s parent directories on demand.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    if let Some(parent) = dst.parent() {
        make_dir_tree(parent)?;
    }
    let copied = std::fs::copy(src, dst)?;
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        bytes = copied,
        "copied file"
    );
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_make_dir_tree_nested() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        make_dir_tree(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_make_dir_tree_idempotent() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("a");
        make_dir_tree(&dir).unwrap();
        make_dir_tree(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_make_dir_tree_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("private");
        make_dir_tree(&dir).unwrap();
        let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn test_write_text_file_roundtrip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("note.txt");
        write_text_file(&path, "hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_text_file_truncates() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("note.txt");
        write_text_file(&path, "a long first version").unwrap();
        write_text_file(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_copy_file_creates_destination_dirs() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src.txt");
        std::fs::write(&src, "payload").unwrap();

        let dst = tmp.path().join("deep/nested/dst.txt");
        let copied = copy_file(&src, &dst).unwrap();
        assert_eq!(copied, "payload".len() as u64);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "payload");
    }

    #[test]
    fn test_copy_file_overwrites_existing() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src.txt");
        let dst = tmp.path().join("dst.txt");
        std::fs::write(&src, "new").unwrap();
        std::fs::write(&dst, "old contents").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn test_copy_file_missing_source_errors() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope.txt");
        let dst = tmp.path().join("dst.txt");
        assert!(copy_file(&missing, &dst).is_err());
    }
}
