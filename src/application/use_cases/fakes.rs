//! In-memory port implementations shared by the use case unit tests

use crate::application::dto::ScanRequest;
use crate::ports::outbound::{ProgressReporter, ScanRepository, ScanRunner, SchedulerRepository};
use crate::scan_history::domain::{ScanRecord, SchedulerEntry};
use crate::shared::Result;
use async_trait::async_trait;
use std::cell::RefCell;

#[derive(Default)]
pub struct MemoryScans {
    pub records: RefCell<Vec<ScanRecord>>,
}

impl MemoryScans {
    pub fn with(records: Vec<ScanRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }
}

impl ScanRepository for MemoryScans {
    fn load_all(&self) -> Vec<ScanRecord> {
        self.records.borrow().clone()
    }

    fn save_all(&self, records: &[ScanRecord]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySchedulers {
    pub entries: RefCell<Vec<SchedulerEntry>>,
}

impl SchedulerRepository for MemorySchedulers {
    fn load_all(&self) -> Vec<SchedulerEntry> {
        self.entries.borrow().clone()
    }

    fn save_all(&self, entries: &[SchedulerEntry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

/// Returns a canned record, or fails with the given message
pub struct CannedRunner {
    pub outcome: std::result::Result<ScanRecord, String>,
}

#[async_trait]
impl ScanRunner for CannedRunner {
    async fn run(&self, _request: &ScanRequest) -> Result<ScanRecord> {
        match &self.outcome {
            Ok(record) => Ok(record.clone()),
            Err(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }
}

#[derive(Default)]
pub struct SilentReporter {
    pub errors: RefCell<Vec<String>>,
}

impl ProgressReporter for SilentReporter {
    fn report(&self, _message: &str) {}
    fn start_activity(&self, _message: &str) {}
    fn finish_activity(&self, _message: &str) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
