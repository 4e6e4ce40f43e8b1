pub mod scan_record;
pub mod scheduler_entry;
pub mod severity;
pub mod timestamp;

pub use scan_record::{ScanRecord, Vulnerability};
pub use scheduler_entry::{Frequency, SchedulerEntry};
pub use severity::{Severity, SeverityCounts};
