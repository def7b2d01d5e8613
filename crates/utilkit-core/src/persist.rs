//! Object persistence - binary (bincode) and TOML round-trips through bytes or files.
//!
//! Load helpers return `Ok(None)` when the file does not exist so callers can
//! fall back to defaults on first run.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Serialize `value` into a compact binary buffer.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

/// Rebuild a value from a buffer produced by [`to_bytes`].
pub fn from_bytes<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    Ok(bincode::deserialize(data)?)
}

/// Write `value` to `path` in binary form, replacing any existing file.
pub fn save_binary<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let bytes = to_bytes(value)?;
    std::fs::write(path, bytes)?;
    log::debug!("saved {} bytes to {}", path.metadata()?.len(), path.display());
    Ok(())
}

/// Read a value written by [`save_binary`].
pub fn load_binary<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path)?;
    from_bytes(&bytes).map(Some)
}

/// Write `value` to `path` as pretty TOML.
pub fn save_toml<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Read a value written by [`save_toml`].
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&content)?))
}
