use crate::scan_history::domain::ScanRecord;
use crate::shared::Result;

/// ScanExporter port for rendering scans into a downloadable document
///
/// This port abstracts the export formats (JSON, CSV, plain text). Single
/// and bulk exports have different layouts, so both are part of the port.
pub trait ScanExporter {
    /// Renders one scan
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn export_scan(&self, scan: &ScanRecord) -> Result<String>;

    /// Renders several scans into one document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn export_scans(&self, scans: &[ScanRecord]) -> Result<String>;
}
