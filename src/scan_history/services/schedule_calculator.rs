use crate::scan_history::domain::Frequency;
use chrono::{DateTime, Duration, Months, Utc};

/// Computes when a schedule is next due
pub struct ScheduleCalculator;

impl ScheduleCalculator {
    /// Next run time for `frequency`, counted from `now`
    ///
    /// Monthly schedules move one calendar month; when the target month is
    /// shorter the day is clamped to its last day (Jan 31 -> Feb 28).
    pub fn next_run(frequency: Frequency, now: DateTime<Utc>) -> DateTime<Utc> {
        match frequency {
            Frequency::Daily => now + Duration::days(1),
            Frequency::Weekly => now + Duration::days(7),
            Frequency::Monthly => now
                .checked_add_months(Months::new(1))
                .unwrap_or(now + Duration::days(30)),
        }
    }
}
