/// Filesystem adapters for the JSON stores and file output
mod file_writer;
mod json_store;
mod scan_store;
mod scheduler_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use scan_store::JsonFileScanRepository;
pub use scheduler_store::JsonFileSchedulerRepository;
