use async_trait::async_trait;
use scanboard::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ScanRunner returning a canned record and capturing requests
#[derive(Clone)]
pub struct MockScanRunner {
    pub record: Option<ScanRecord>,
    pub requests: Arc<Mutex<Vec<(String, ScanKind)>>>,
}

impl MockScanRunner {
    pub fn returning(record: ScanRecord) -> Self {
        Self {
            record: Some(record),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            record: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<(String, ScanKind)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScanRunner for MockScanRunner {
    async fn run(&self, request: &ScanRequest) -> Result<ScanRecord> {
        self.requests
            .lock()
            .unwrap()
            .push((request.url.clone(), request.kind));
        match self.record {
            Some(ref record) => Ok(record.clone()),
            None => anyhow::bail!("Mock scanner failure"),
        }
    }
}
