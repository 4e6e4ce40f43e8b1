/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_scan_repository;
mod mock_scan_runner;
mod mock_scheduler_repository;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_repository::MockScanRepository;
pub use mock_scan_runner::MockScanRunner;
pub use mock_scheduler_repository::MockSchedulerRepository;
