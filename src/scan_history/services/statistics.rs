use crate::scan_history::domain::{timestamp, ScanRecord, SchedulerEntry, SeverityCounts};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of records returned in `DashboardStats::recent_scans`
pub const RECENT_SCAN_LIMIT: usize = 10;

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_scans: usize,
    pub total_vulnerabilities: usize,
    pub severity_counts: SeverityCounts,
    pub average_risk_score: i64,
    pub recent_scans: Vec<ScanRecord>,
}

/// Per-calendar-day aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    pub date: String,
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub scans: usize,
}

impl DailyBucket {
    fn empty(date: String) -> Self {
        Self {
            date,
            total: 0,
            critical: 0,
            high: 0,
            medium: 0,
            low: 0,
            scans: 0,
        }
    }

    fn absorb(&mut self, record: &ScanRecord) {
        let counts = record.severity_counts();
        self.scans += 1;
        self.total += record.vulnerability_count();
        self.critical += counts.critical;
        self.high += counts.high;
        self.medium += counts.medium;
        self.low += counts.low;
    }
}

/// Live view over the whole store, evaluated against the current time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeStats {
    pub total_scans: usize,
    pub scans_last_24h: usize,
    pub scans_last_week: usize,
    pub total_vulnerabilities: usize,
    pub severity_counts: SeverityCounts,
    pub active_schedulers: usize,
    pub total_schedulers: usize,
    pub average_risk_score: i64,
    pub last_scan: Option<ScanRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub id: String,
    pub timestamp: String,
    pub total_vulnerabilities: usize,
    pub risk_score: i64,
    pub severity_counts: SeverityCounts,
}

/// History of a single target, oldest scan first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTimeline {
    pub url: String,
    pub total_scans: usize,
    pub timeline: Vec<TimelinePoint>,
}

/// Aggregation engine
///
/// Stateless functions over a full snapshot of the store. Nothing is
/// cached; callers recompute from a fresh load on every request.
pub struct ScanStatistics;

impl ScanStatistics {
    /// Computes totals, the severity histogram, the mean risk score and the
    /// most recent records
    ///
    /// The mean only covers records that define `risk_score` and is 0 when
    /// none do. Recent scans are the last records appended, newest first.
    pub fn compute_stats(records: &[ScanRecord]) -> DashboardStats {
        let severity_counts = Self::severity_histogram(records);
        let scored: Vec<i64> = records.iter().filter_map(|r| r.risk_score).collect();

        DashboardStats {
            total_scans: records.len(),
            total_vulnerabilities: Self::total_vulnerabilities(records),
            severity_counts,
            average_risk_score: rounded_mean(scored.iter().sum(), scored.len()),
            recent_scans: records
                .iter()
                .rev()
                .take(RECENT_SCAN_LIMIT)
                .cloned()
                .collect(),
        }
    }

    /// Groups records by the calendar date of their timestamp
    ///
    /// Records whose timestamp has no valid date portion are skipped.
    pub fn compute_trends(records: &[ScanRecord]) -> Vec<DailyBucket> {
        let mut buckets: BTreeMap<String, DailyBucket> = BTreeMap::new();

        for record in records {
            let Some(date) = timestamp::date_portion(&record.timestamp) else {
                log::debug!(
                    "Skipping scan {} in trends: unparseable timestamp {:?}",
                    record.id,
                    record.timestamp
                );
                continue;
            };
            let key = date.format("%Y-%m-%d").to_string();
            buckets
                .entry(key.clone())
                .or_insert_with(|| DailyBucket::empty(key))
                .absorb(record);
        }

        buckets.into_values().collect()
    }

    /// Computes the realtime panel against `now`
    ///
    /// Windows are strict: a scan exactly 24 hours old is outside the
    /// 24-hour window. Unlike `compute_stats`, the mean here spans every
    /// record with a missing score counted as 0.
    pub fn compute_realtime_stats(
        records: &[ScanRecord],
        schedulers: &[SchedulerEntry],
        now: DateTime<Utc>,
    ) -> RealtimeStats {
        let day_ago = now - Duration::hours(24);
        let week_ago = now - Duration::days(7);
        let newer_than = |cutoff: DateTime<Utc>| {
            records
                .iter()
                .filter(|r| r.instant().is_some_and(|t| t > cutoff))
                .count()
        };

        RealtimeStats {
            total_scans: records.len(),
            scans_last_24h: newer_than(day_ago),
            scans_last_week: newer_than(week_ago),
            total_vulnerabilities: Self::total_vulnerabilities(records),
            severity_counts: Self::severity_histogram(records),
            active_schedulers: schedulers.iter().filter(|s| s.enabled).count(),
            total_schedulers: schedulers.len(),
            average_risk_score: rounded_mean(
                records.iter().map(ScanRecord::risk_score_or_zero).sum(),
                records.len(),
            ),
            last_scan: records.last().cloned(),
        }
    }

    /// Builds the scan history of one target URL, oldest first
    pub fn compute_timeline(records: &[ScanRecord], url: &str) -> ScanTimeline {
        let mut matching: Vec<&ScanRecord> = records.iter().filter(|r| r.url == url).collect();
        sort_chronologically(&mut matching);

        let timeline: Vec<TimelinePoint> = matching
            .into_iter()
            .map(|record| TimelinePoint {
                id: record.id.clone(),
                timestamp: record.timestamp.clone(),
                total_vulnerabilities: record.vulnerability_count(),
                risk_score: record.risk_score_or_zero(),
                severity_counts: record.severity_counts(),
            })
            .collect();

        ScanTimeline {
            url: url.to_string(),
            total_scans: timeline.len(),
            timeline,
        }
    }

    pub fn total_vulnerabilities(records: &[ScanRecord]) -> usize {
        records.iter().map(ScanRecord::vulnerability_count).sum()
    }

    pub fn severity_histogram(records: &[ScanRecord]) -> SeverityCounts {
        let mut counts = SeverityCounts::new();
        for record in records {
            counts.absorb(&record.severity_counts());
        }
        counts
    }
}

/// Stable ascending sort by parsed timestamp; unparseable timestamps last
pub fn sort_chronologically(records: &mut [&ScanRecord]) {
    records.sort_by_key(|r| {
        let instant = r.instant();
        (instant.is_none(), instant)
    });
}

fn rounded_mean(sum: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as i64
}
