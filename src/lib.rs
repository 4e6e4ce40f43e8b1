//! scanboard - history, statistics and exports for web vulnerability scans
//!
//! This library keeps a JSON-backed history of vulnerability scan results and
//! derives dashboard statistics, scan comparisons, filtered searches and
//! JSON/CSV/text exports from it, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_history`): Scan records, severities and pure aggregation logic
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): JSON stores, exporters, scanner process and console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scanboard::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let scans = JsonFileScanRepository::new(PathBuf::from("data/scans.json"));
//! let schedulers = JsonFileSchedulerRepository::new(PathBuf::from("data/schedulers.json"));
//!
//! let dashboard = DashboardUseCase::new(scans, schedulers);
//! let stats = dashboard.stats();
//! println!("{} scans, {} vulnerabilities", stats.total_scans, stats.total_vulnerabilities);
//!
//! let export = ExportScansUseCase::new(JsonFileScanRepository::new(PathBuf::from(
//!     "data/scans.json",
//! )));
//! let artifact = export.export_one("scan-1", ExportFormat::Csv)?;
//! println!("{}", artifact.body);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod scan_history;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonFileScanRepository, JsonFileSchedulerRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvExporter, JsonExporter, TextExporter};
    pub use crate::adapters::outbound::process::{ProcessScanRunner, ScannerScripts};
    pub use crate::application::dto::{ExportArtifact, ExportFormat, ScanKind, ScanRequest};
    pub use crate::application::use_cases::{
        CompareScansUseCase, DashboardUseCase, ExportScansUseCase, ImportScanUseCase,
        ManageSchedulersUseCase, RecordScanUseCase, SearchScansUseCase,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ScanExporter, ScanRepository, ScanRunner,
        SchedulerRepository,
    };
    pub use crate::scan_history::domain::{
        Frequency, ScanRecord, SchedulerEntry, Severity, SeverityCounts, Vulnerability,
    };
    pub use crate::scan_history::services::{
        ScanComparator, ScanFilter, ScanQuery, ScanStatistics, ScheduleCalculator,
    };
    pub use crate::shared::Result;
}
