/// External-process adapters
mod scan_runner;

pub use scan_runner::{ProcessScanRunner, ScannerScripts};
