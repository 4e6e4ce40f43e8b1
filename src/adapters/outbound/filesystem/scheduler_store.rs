use super::json_store::{load_array, save_array};
use crate::ports::outbound::SchedulerRepository;
use crate::scan_history::domain::SchedulerEntry;
use crate::shared::Result;
use std::path::PathBuf;

/// JsonFileSchedulerRepository adapter storing schedules as one JSON array
pub struct JsonFileSchedulerRepository {
    path: PathBuf,
}

impl JsonFileSchedulerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SchedulerRepository for JsonFileSchedulerRepository {
    fn load_all(&self) -> Vec<SchedulerEntry> {
        load_array(&self.path, "scheduler store")
    }

    fn save_all(&self, entries: &[SchedulerEntry]) -> Result<()> {
        save_array(&self.path, entries)
    }
}
