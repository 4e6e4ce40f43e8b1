use crate::ports::outbound::{ScanRepository, SchedulerRepository};
use crate::scan_history::services::{
    DailyBucket, DashboardStats, RealtimeStats, ScanStatistics, ScanTimeline,
};
use crate::shared::error::ScanboardError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// DashboardUseCase - read-only aggregate views over the stores
///
/// Every view loads the current snapshot of the history and hands it to the
/// pure aggregation functions.
pub struct DashboardUseCase<SR, SCR> {
    scan_repository: SR,
    scheduler_repository: SCR,
}

impl<SR, SCR> DashboardUseCase<SR, SCR>
where
    SR: ScanRepository,
    SCR: SchedulerRepository,
{
    pub fn new(scan_repository: SR, scheduler_repository: SCR) -> Self {
        Self {
            scan_repository,
            scheduler_repository,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        ScanStatistics::compute_stats(&self.scan_repository.load_all())
    }

    pub fn trends(&self) -> Vec<DailyBucket> {
        ScanStatistics::compute_trends(&self.scan_repository.load_all())
    }

    /// Live statistics evaluated at `now`
    pub fn realtime(&self, now: DateTime<Utc>) -> RealtimeStats {
        let records = self.scan_repository.load_all();
        let schedulers = self.scheduler_repository.load_all();
        ScanStatistics::compute_realtime_stats(&records, &schedulers, now)
    }

    /// History of one target
    ///
    /// # Errors
    /// Returns a validation error when `url` is blank
    pub fn timeline(&self, url: &str) -> Result<ScanTimeline> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ScanboardError::validation("URL is required").into());
        }
        let records = self.scan_repository.find_all_by_url(url);
        Ok(ScanStatistics::compute_timeline(&records, url))
    }
}
