use super::json_store::{load_array, load_values, save_array};
use crate::ports::outbound::ScanRepository;
use crate::scan_history::domain::ScanRecord;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// JsonFileScanRepository adapter storing the scan history as one JSON array
///
/// Appends through one repository value are serialised with an internal
/// lock. Two processes appending to the same file can still lose a record.
///
/// An append rewrites the stored elements as they are on disk, so entries
/// that `load_all` skips as undecodable are kept.
pub struct JsonFileScanRepository {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl JsonFileScanRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            append_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScanRepository for JsonFileScanRepository {
    fn load_all(&self) -> Vec<ScanRecord> {
        load_array(&self.path, "scan store")
    }

    fn save_all(&self, records: &[ScanRecord]) -> Result<()> {
        save_array(&self.path, records)
    }

    fn append(&self, record: ScanRecord) -> Result<ScanRecord> {
        let _guard = self
            .append_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("Scan store lock was poisoned"))?;

        let record = record.with_assigned_id();
        let mut values = load_values(&self.path, "scan store");
        values.push(serde_json::to_value(&record)?);
        save_array(&self.path, &values)?;
        log::info!("Stored scan {} for {}", record.id, record.url);
        Ok(record)
    }
}
