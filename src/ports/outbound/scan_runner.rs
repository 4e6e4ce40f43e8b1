use crate::application::dto::ScanRequest;
use crate::scan_history::domain::ScanRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// ScanRunner port for the external vulnerability scanner
///
/// The detection logic itself is opaque to this crate: an implementation
/// hands the request to some scanner and returns the record it produced.
///
/// # Async Support
/// Scans take seconds to minutes, so the port is async. Implementations
/// must be `Send + Sync`.
#[async_trait]
pub trait ScanRunner: Send + Sync {
    /// Runs one scan
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scanner cannot be started or exits unsuccessfully
    /// - The scanner output is not a valid scan record
    /// - The scan exceeds the configured timeout
    async fn run(&self, request: &ScanRequest) -> Result<ScanRecord>;
}
