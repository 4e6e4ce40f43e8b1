use crate::shared::error::ScanboardError;
use crate::shared::security::{read_checked, MAX_STORE_SIZE};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const SYMLINK_REFUSED: &str =
    "Security: Store path is a symbolic link. For security reasons, writing to symbolic links is not allowed.";

/// Loads the raw elements of a JSON array document
///
/// Never fails. A missing file is the normal empty state; any other problem
/// (symlink, oversize file, unreadable content, or a document that is not a
/// JSON array) is logged and also reads as empty.
pub(super) fn load_values(path: &Path, description: &str) -> Vec<Value> {
    if !path.exists() {
        log::debug!("{} {} does not exist yet", description, path.display());
        return Vec::new();
    }

    let content = match read_checked(path, description, MAX_STORE_SIZE) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Ignoring unreadable {}: {}", description, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Value>>(&content) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Ignoring malformed {} {}: {}", description, path.display(), e);
            Vec::new()
        }
    }
}

/// Loads a JSON array document, decoding each element on its own
///
/// An element that does not decode into `T` is skipped with a warning
/// naming its index; the other elements are still returned.
pub(super) fn load_array<T: DeserializeOwned>(path: &Path, description: &str) -> Vec<T> {
    load_values(path, description)
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!(
                    "Skipping entry {} of {} {}: {}",
                    index,
                    description,
                    path.display(),
                    e
                );
                None
            }
        })
        .collect()
}

/// Writes `items` as a pretty-printed JSON array, replacing the file atomically
///
/// The document is written to a temporary file in the target directory and
/// renamed over the target, so readers see either the old or the new array.
pub(super) fn save_array<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let write_error = |details: String| ScanboardError::StoreWriteError {
        path: path.to_path_buf(),
        details,
    };

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(write_error(SYMLINK_REFUSED.to_string()).into());
        }
    }

    let dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .map_err(|e| write_error(format!("Failed to create {}: {}", dir.display(), e)))?;

    let json = serde_json::to_string_pretty(items)
        .map_err(|e| write_error(format!("Failed to serialize: {}", e)))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_error(e.to_string()))?;
    temp.write_all(json.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| write_error(e.to_string()))?;
    temp.persist(path)
        .map_err(|e| write_error(e.error.to_string()))?;

    log::debug!("Wrote {} entries to {}", items.len(), path.display());
    Ok(())
}
