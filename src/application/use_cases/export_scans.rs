use crate::application::dto::{ExportArtifact, ExportFormat};
use crate::application::factories::ExporterFactory;
use crate::ports::outbound::ScanRepository;
use crate::scan_history::domain::ScanRecord;
use crate::shared::error::ScanboardError;
use crate::shared::Result;

/// ExportScansUseCase - renders stored scans into a downloadable document
pub struct ExportScansUseCase<R: ScanRepository> {
    scan_repository: R,
}

impl<R: ScanRepository> ExportScansUseCase<R> {
    pub fn new(scan_repository: R) -> Self {
        Self { scan_repository }
    }

    /// Exports a single scan
    ///
    /// # Arguments
    /// * `id` - Scan id
    /// * `format` - Target format
    ///
    /// # Returns
    /// An artifact named `scan-<id>.<ext>`
    ///
    /// # Errors
    /// Returns `ScanNotFound` when no scan has the id
    pub fn export_one(&self, id: &str, format: ExportFormat) -> Result<ExportArtifact> {
        let scan = self
            .scan_repository
            .find_by_id(id)
            .ok_or_else(|| ScanboardError::ScanNotFound { id: id.to_string() })?;

        let body = ExporterFactory::create(format).export_scan(&scan)?;
        Ok(ExportArtifact {
            file_name: format!("scan-{}.{}", id, format.extension()),
            content_type: format.content_type(),
            body,
        })
    }

    /// Exports every scan whose id is in `ids`, in store order
    ///
    /// Ids that match nothing are skipped; the export only fails when none
    /// of them match.
    ///
    /// # Errors
    /// - Validation error for an empty id list
    /// - `ScansNotFound` when no id matches
    pub fn export_many(&self, ids: &[String], format: ExportFormat) -> Result<ExportArtifact> {
        if ids.is_empty() {
            return Err(ScanboardError::validation("Scan IDs array is required").into());
        }

        let selected: Vec<ScanRecord> = self
            .scan_repository
            .load_all()
            .into_iter()
            .filter(|scan| ids.contains(&scan.id))
            .collect();

        if selected.is_empty() {
            return Err(ScanboardError::ScansNotFound { ids: ids.to_vec() }.into());
        }
        if selected.len() < ids.len() {
            log::warn!(
                "Bulk export matched {} of {} requested scan ids",
                selected.len(),
                ids.len()
            );
        }

        let body = ExporterFactory::create(format).export_scans(&selected)?;
        Ok(ExportArtifact {
            file_name: format!("scans-bulk-export.{}", format.extension()),
            content_type: format.content_type(),
            body,
        })
    }
}
