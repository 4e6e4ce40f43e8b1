use crate::ports::outbound::ScanRepository;
use crate::scan_history::domain::ScanRecord;
use crate::scan_history::services::{ComparisonReport, ScanComparator, TypeComparison};
use crate::shared::error::ScanboardError;
use crate::shared::Result;

/// CompareScansUseCase - resolves two scan ids and diffs them
///
/// The first id is treated as the older scan and the second as the newer
/// one; no reordering by timestamp takes place.
pub struct CompareScansUseCase<R: ScanRepository> {
    scan_repository: R,
}

impl<R: ScanRepository> CompareScansUseCase<R> {
    pub fn new(scan_repository: R) -> Self {
        Self { scan_repository }
    }

    /// Finding-level comparison (new / fixed / common vulnerabilities)
    pub fn compare(&self, older_id: &str, newer_id: &str) -> Result<ComparisonReport> {
        let (older, newer) = self.resolve(older_id, newer_id)?;
        let report = ScanComparator::summarize_comparison(&older, &newer);
        log::debug!(
            "Compared {} -> {}: {} new, {} fixed",
            older_id,
            newer_id,
            report.summary.new_count,
            report.summary.fixed_count
        );
        Ok(report)
    }

    /// Type-level comparison with per-scan severity counts
    pub fn compare_by_type(&self, older_id: &str, newer_id: &str) -> Result<TypeComparison> {
        let (older, newer) = self.resolve(older_id, newer_id)?;
        Ok(ScanComparator::compare_by_type(&older, &newer))
    }

    /// Looks up both scans in one snapshot
    ///
    /// # Errors
    /// - Validation error if either id is blank
    /// - `ScansNotFound` naming every id that did not resolve
    fn resolve(&self, older_id: &str, newer_id: &str) -> Result<(ScanRecord, ScanRecord)> {
        if older_id.trim().is_empty() || newer_id.trim().is_empty() {
            return Err(ScanboardError::validation("Both scan IDs are required").into());
        }

        let records = self.scan_repository.load_all();
        let find = |id: &str| records.iter().find(|r| r.id == id).cloned();

        match (find(older_id), find(newer_id)) {
            (Some(older), Some(newer)) => Ok((older, newer)),
            (older, newer) => {
                let mut ids = Vec::new();
                if older.is_none() {
                    ids.push(older_id.to_string());
                }
                if newer.is_none() {
                    ids.push(newer_id.to_string());
                }
                Err(ScanboardError::ScansNotFound { ids }.into())
            }
        }
    }
}
