/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, scanner processes, console).
pub mod exporter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_repository;
pub mod scan_runner;
pub mod scheduler_repository;

pub use exporter::ScanExporter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_repository::ScanRepository;
pub use scan_runner::ScanRunner;
pub use scheduler_repository::SchedulerRepository;
