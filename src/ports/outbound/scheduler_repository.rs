use crate::scan_history::domain::SchedulerEntry;
use crate::shared::Result;

/// SchedulerRepository port for stored scan schedules
///
/// Same persistence contract as `ScanRepository`: loading is fail-open,
/// saving replaces the whole collection.
pub trait SchedulerRepository {
    fn load_all(&self) -> Vec<SchedulerEntry>;

    /// # Errors
    /// Returns an error if the backing store cannot be written
    fn save_all(&self, entries: &[SchedulerEntry]) -> Result<()>;
}
