use crate::ports::outbound::{ProgressReporter, ScanRepository};
use crate::scan_history::domain::ScanRecord;
use crate::shared::error::ScanboardError;
use crate::shared::Result;

/// ImportScanUseCase - adds a scan result produced outside this process
pub struct ImportScanUseCase<REPO, PR> {
    scan_repository: REPO,
    progress_reporter: PR,
}

impl<REPO, PR> ImportScanUseCase<REPO, PR>
where
    REPO: ScanRepository,
    PR: ProgressReporter,
{
    pub fn new(scan_repository: REPO, progress_reporter: PR) -> Self {
        Self {
            scan_repository,
            progress_reporter,
        }
    }

    /// Appends `record`, assigning an id when it has none
    ///
    /// # Errors
    /// Returns an error if the record has no url or the store cannot be written
    pub fn execute(&self, record: ScanRecord) -> Result<ScanRecord> {
        if record.url.trim().is_empty() {
            return Err(ScanboardError::validation("Imported scan has no url").into());
        }
        let stored = self.scan_repository.append(record)?;
        let message = format!("📥 Imported scan {} for {}", stored.id, stored.url);
        self.progress_reporter.report(&message);
        Ok(stored)
    }
}
