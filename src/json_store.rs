//! JSON persistence with load-or-initialize semantics.
//!
//! Values are pretty-printed with tab indentation and parent directories
//! are created on demand, so callers can point at a config path that does
//! not exist yet.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Error reading or writing a JSON store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store contains malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `value` to `path` as tab-indented JSON, creating parent
/// directories first.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        crate::fsutil::make_dir_tree(parent)?;
    }
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    std::fs::write(path, buf)?;
    Ok(())
}

/// Load `path`, initializing it with `default` when missing.
///
/// A file that exists but fails to parse is an error; silently handing
/// back the default would hide a corrupted store.
pub fn load_or_init<T>(path: &Path, default: &T) -> Result<T, StoreError>
where
    T: Serialize + DeserializeOwned,
{
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store missing, writing default");
            write_json(path, default)?;
            std::fs::read(path)?
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
}
