/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod export_artifact;
mod export_format;
mod scan_request;

pub use export_artifact::ExportArtifact;
pub use export_format::ExportFormat;
pub use scan_request::{ScanKind, ScanRequest};
