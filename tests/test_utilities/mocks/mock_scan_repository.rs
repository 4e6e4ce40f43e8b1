use scanboard::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory ScanRepository; clones share the same records
#[derive(Default, Clone)]
pub struct MockScanRepository {
    pub records: Arc<Mutex<Vec<ScanRecord>>>,
    pub fail_writes: bool,
}

impl MockScanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ScanRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_writes: false,
        }
    }

    pub fn with_write_failure() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<ScanRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl ScanRepository for MockScanRepository {
    fn load_all(&self) -> Vec<ScanRecord> {
        self.records.lock().unwrap().clone()
    }

    fn save_all(&self, records: &[ScanRecord]) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("Mock scan repository write failure");
        }
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}
