/// Use cases module containing application business logic orchestration
mod compare_scans;
mod dashboard;
mod export_scans;
mod import_scan;
mod manage_schedulers;
mod record_scan;
mod search_scans;

#[cfg(test)]
mod fakes;

pub use compare_scans::CompareScansUseCase;
pub use dashboard::DashboardUseCase;
pub use export_scans::ExportScansUseCase;
pub use import_scan::ImportScanUseCase;
pub use manage_schedulers::{ManageSchedulersUseCase, NewSchedule, SchedulerUpdate};
pub use record_scan::RecordScanUseCase;
pub use search_scans::{SearchResults, SearchScansUseCase};
