use crate::scan_history::domain::ScanRecord;
use crate::scan_history::services::statistics::sort_chronologically;
use crate::shared::Result;

/// ScanRepository port for the scan history
///
/// The history is one ordered sequence of records in insertion order.
/// Only `load_all` and `save_all` are required; the remaining operations
/// are expressed on top of them and may be overridden by adapters that can
/// do better (for example, serialising appends).
pub trait ScanRepository {
    /// Loads every stored record
    ///
    /// This never fails: a missing, unreadable or malformed backing store
    /// reads as an empty history.
    fn load_all(&self) -> Vec<ScanRecord>;

    /// Replaces the whole history with `records`
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written
    fn save_all(&self, records: &[ScanRecord]) -> Result<()>;

    /// Appends one record, assigning an id when it has none
    ///
    /// # Returns
    /// The record as stored
    fn append(&self, record: ScanRecord) -> Result<ScanRecord> {
        let record = record.with_assigned_id();
        let mut records = self.load_all();
        records.push(record.clone());
        self.save_all(&records)?;
        Ok(record)
    }

    /// First record with the given id
    fn find_by_id(&self, id: &str) -> Option<ScanRecord> {
        if id.trim().is_empty() {
            return None;
        }
        self.load_all().into_iter().find(|r| r.id == id)
    }

    /// Every record for `url`, oldest first
    fn find_all_by_url(&self, url: &str) -> Vec<ScanRecord> {
        let records = self.load_all();
        let mut matching: Vec<&ScanRecord> = records.iter().filter(|r| r.url == url).collect();
        sort_chronologically(&mut matching);
        matching.into_iter().cloned().collect()
    }
}
