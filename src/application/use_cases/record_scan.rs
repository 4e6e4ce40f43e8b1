use crate::application::dto::ScanRequest;
use crate::ports::outbound::{ProgressReporter, ScanRepository, ScanRunner};
use crate::scan_history::domain::ScanRecord;
use crate::shared::error::ScanboardError;
use crate::shared::Result;

/// RecordScanUseCase - runs a scan and adds its result to the history
///
/// # Type Parameters
/// * `REPO` - ScanRepository implementation
/// * `RUN` - ScanRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct RecordScanUseCase<REPO, RUN, PR> {
    scan_repository: REPO,
    scan_runner: RUN,
    progress_reporter: PR,
}

impl<REPO, RUN, PR> RecordScanUseCase<REPO, RUN, PR>
where
    REPO: ScanRepository,
    RUN: ScanRunner,
    PR: ProgressReporter,
{
    pub fn new(scan_repository: REPO, scan_runner: RUN, progress_reporter: PR) -> Self {
        Self {
            scan_repository,
            scan_runner,
            progress_reporter,
        }
    }

    /// Runs the scanner for `request` and appends the produced record
    ///
    /// A record without a `scan_type` is tagged with the requested kind, and
    /// one without a `url` gets the requested url.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The url is empty
    /// - The scanner fails or produces unusable output
    /// - The store cannot be written
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanRecord> {
        let url = request.url.trim();
        if url.is_empty() {
            return Err(ScanboardError::validation("URL is required").into());
        }

        log::info!("Starting {} scan for: {}", request.kind, url);
        self.progress_reporter.start_activity(&format!(
            "🔍 Running {} scan for {}...",
            request.kind, url
        ));

        let mut record = match self.scan_runner.run(&request).await {
            Ok(record) => record,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ {} scan failed for {}", request.kind, url));
                return Err(e);
            }
        };

        if record.scan_type.is_none() {
            record.scan_type = Some(request.kind.to_string());
        }
        if record.url.trim().is_empty() {
            record.url = url.to_string();
        }

        let stored = self.scan_repository.append(record)?;
        self.progress_reporter.finish_activity(&format!(
            "✅ Scan completed: {} ({} vulnerabilities)",
            stored.id,
            stored.vulnerability_count()
        ));
        Ok(stored)
    }
}
