use crate::ports::outbound::SchedulerRepository;
use crate::scan_history::domain::{Frequency, SchedulerEntry};
use crate::scan_history::services::ScheduleCalculator;
use crate::shared::error::ScanboardError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

const DEFAULT_SCAN_TYPE: &str = "basic";

/// Input for creating a schedule
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub name: String,
    pub url: String,
    pub frequency: Frequency,
    /// Defaults to `basic`
    pub scan_type: Option<String>,
    /// Defaults to `true`
    pub enabled: Option<bool>,
}

/// Partial update of a schedule; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct SchedulerUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub frequency: Option<Frequency>,
    pub scan_type: Option<String>,
    pub enabled: Option<bool>,
}

impl SchedulerUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.frequency.is_none()
            && self.scan_type.is_none()
            && self.enabled.is_none()
    }
}

/// ManageSchedulersUseCase - CRUD over stored scan schedules
///
/// Schedules are records only. Nothing here runs a scan or advances
/// `last_run` / `total_runs`.
pub struct ManageSchedulersUseCase<R: SchedulerRepository> {
    scheduler_repository: R,
}

impl<R: SchedulerRepository> ManageSchedulersUseCase<R> {
    pub fn new(scheduler_repository: R) -> Self {
        Self {
            scheduler_repository,
        }
    }

    pub fn list(&self) -> Vec<SchedulerEntry> {
        self.scheduler_repository.load_all()
    }

    /// Creates a schedule due one period after `now`
    ///
    /// # Errors
    /// Returns a validation error if the name or url is blank
    pub fn create(&self, request: NewSchedule, now: DateTime<Utc>) -> Result<SchedulerEntry> {
        if request.name.trim().is_empty() || request.url.trim().is_empty() {
            return Err(ScanboardError::validation("Name, URL, and frequency are required").into());
        }

        let mut entries = self.scheduler_repository.load_all();
        let entry = SchedulerEntry {
            id: unique_id(&entries, now),
            name: request.name,
            url: request.url,
            frequency: request.frequency,
            scan_type: request
                .scan_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SCAN_TYPE.to_string()),
            enabled: request.enabled.unwrap_or(true),
            created_at: now,
            last_run: None,
            next_run: ScheduleCalculator::next_run(request.frequency, now),
            total_runs: 0,
        };

        entries.push(entry.clone());
        self.scheduler_repository.save_all(&entries)?;
        log::info!("Created scheduler {} for {}", entry.id, entry.url);
        Ok(entry)
    }

    /// Merges `update` into the schedule with `id`
    ///
    /// `next_run` is recomputed from `now` whenever the update carries a
    /// frequency, even an unchanged one.
    ///
    /// # Errors
    /// Returns `SchedulerNotFound` if no schedule has the id
    pub fn update(
        &self,
        id: &str,
        update: SchedulerUpdate,
        now: DateTime<Utc>,
    ) -> Result<SchedulerEntry> {
        let mut entries = self.scheduler_repository.load_all();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ScanboardError::SchedulerNotFound { id: id.to_string() })?;

        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(url) = update.url {
            entry.url = url;
        }
        if let Some(scan_type) = update.scan_type {
            entry.scan_type = scan_type;
        }
        if let Some(enabled) = update.enabled {
            entry.enabled = enabled;
        }
        if let Some(frequency) = update.frequency {
            entry.frequency = frequency;
            entry.next_run = ScheduleCalculator::next_run(frequency, now);
        }

        let updated = entry.clone();
        self.scheduler_repository.save_all(&entries)?;
        Ok(updated)
    }

    /// Removes every schedule with `id`; deleting an unknown id succeeds
    ///
    /// # Returns
    /// The number of removed schedules
    pub fn delete(&self, id: &str) -> Result<usize> {
        let mut entries = self.scheduler_repository.load_all();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = before - entries.len();
        self.scheduler_repository.save_all(&entries)?;
        Ok(removed)
    }
}

/// `scheduler-<unix millis>`, with a numeric suffix when already taken
fn unique_id(entries: &[SchedulerEntry], now: DateTime<Utc>) -> String {
    let base = format!("scheduler-{}", now.timestamp_millis());
    let taken = |candidate: &str| entries.iter().any(|e| e.id == candidate);
    if !taken(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}
