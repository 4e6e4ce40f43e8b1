use crate::ports::outbound::ScanRepository;
use crate::scan_history::domain::ScanRecord;
use crate::scan_history::services::{ScanFilter, ScanQuery};
use crate::shared::Result;
use serde::Serialize;

/// Search result: the number of matches and the matching scans
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub total: usize,
    pub scans: Vec<ScanRecord>,
}

/// SearchScansUseCase - filtered and sorted view of the history
pub struct SearchScansUseCase<R: ScanRepository> {
    scan_repository: R,
}

impl<R: ScanRepository> SearchScansUseCase<R> {
    pub fn new(scan_repository: R) -> Self {
        Self { scan_repository }
    }

    /// # Errors
    /// Returns a validation error for an invalid query (see `ScanFilter::new`)
    pub fn search(&self, query: ScanQuery) -> Result<SearchResults> {
        let filter = ScanFilter::new(query)?;
        let scans = filter.apply(self.scan_repository.load_all());
        Ok(SearchResults {
            total: scans.len(),
            scans,
        })
    }
}
