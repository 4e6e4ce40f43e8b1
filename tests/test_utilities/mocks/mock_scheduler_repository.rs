use scanboard::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory SchedulerRepository; clones share the same entries
#[derive(Default, Clone)]
pub struct MockSchedulerRepository {
    pub entries: Arc<Mutex<Vec<SchedulerEntry>>>,
}

impl MockSchedulerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<SchedulerEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    pub fn stored(&self) -> Vec<SchedulerEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl SchedulerRepository for MockSchedulerRepository {
    fn load_all(&self) -> Vec<SchedulerEntry> {
        self.entries.lock().unwrap().clone()
    }

    fn save_all(&self, entries: &[SchedulerEntry]) -> Result<()> {
        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}
