use crate::scan_history::domain::{timestamp, ScanRecord};
use crate::shared::error::ScanboardError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Maximum length of a free-text search query
const MAX_QUERY_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Url,
    Vulnerabilities,
    Risk,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "url" => Ok(SortKey::Url),
            "vulnerabilities" | "vulns" => Ok(SortKey::Vulnerabilities),
            "risk" | "risk_score" => Ok(SortKey::Risk),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify 'date', 'url', 'vulnerabilities' or 'risk'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!(
                "Invalid sort order: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

/// Search criteria over the scan history
///
/// Every criterion is optional; an empty query matches everything and keeps
/// collection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanQuery {
    /// Case-insensitive text matched against url, scan type and findings
    pub query: Option<String>,
    /// Raw severity value; `all` disables the filter
    pub severity: Option<String>,
    pub scan_type: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub min_risk_score: Option<i64>,
    pub max_risk_score: Option<i64>,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
}

/// Compiled, validated form of a `ScanQuery`
#[derive(Debug)]
pub struct ScanFilter {
    needle: Option<String>,
    severity: Option<String>,
    scan_type: Option<String>,
    date_from: Option<DateTime<Utc>>,
    date_to: Option<DateTime<Utc>>,
    min_risk_score: Option<i64>,
    max_risk_score: Option<i64>,
    sort_by: Option<SortKey>,
    sort_order: SortOrder,
}

impl ScanFilter {
    /// Validates and compiles a query
    ///
    /// # Errors
    /// - Query text longer than `MAX_QUERY_LENGTH`
    /// - Date bounds that cannot be parsed
    /// - A minimum risk score greater than the maximum
    pub fn new(query: ScanQuery) -> Result<Self> {
        let needle = non_blank(query.query).map(|q| q.to_lowercase());
        if let Some(ref q) = needle {
            if q.len() > MAX_QUERY_LENGTH {
                return Err(ScanboardError::validation(format!(
                    "Search query is too long ({} bytes). Maximum allowed: {} bytes",
                    q.len(),
                    MAX_QUERY_LENGTH
                ))
                .into());
            }
        }

        let date_from = parse_bound("date_from", query.date_from)?;
        let date_to = parse_bound("date_to", query.date_to)?;

        if let (Some(min), Some(max)) = (query.min_risk_score, query.max_risk_score) {
            if min > max {
                return Err(ScanboardError::validation(format!(
                    "Minimum risk score ({}) is greater than maximum risk score ({})",
                    min, max
                ))
                .into());
            }
        }

        let severity = non_blank(query.severity)
            .map(|s| s.to_lowercase())
            .filter(|s| s != "all");

        Ok(Self {
            needle,
            severity,
            scan_type: non_blank(query.scan_type),
            date_from,
            date_to,
            min_risk_score: query.min_risk_score,
            max_risk_score: query.max_risk_score,
            sort_by: query.sort_by,
            sort_order: query.sort_order,
        })
    }

    /// Returns the matching records, sorted when a sort key was given
    pub fn apply(&self, records: Vec<ScanRecord>) -> Vec<ScanRecord> {
        let mut matching: Vec<ScanRecord> =
            records.into_iter().filter(|r| self.matches(r)).collect();

        if let Some(key) = self.sort_by {
            matching.sort_by(|a, b| {
                let ordering = compare_by(key, a, b);
                match self.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        matching
    }

    fn matches(&self, record: &ScanRecord) -> bool {
        self.matches_text(record)
            && self.matches_severity(record)
            && self.matches_scan_type(record)
            && self.matches_dates(record)
            && self.matches_risk(record)
    }

    fn matches_text(&self, record: &ScanRecord) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let contains = |value: Option<&str>| {
            value.is_some_and(|v| v.to_lowercase().contains(needle))
        };

        contains(Some(&record.url))
            || contains(record.scan_type.as_deref())
            || record.findings().iter().any(|v| {
                contains(v.kind.as_deref())
                    || contains(v.title.as_deref())
                    || contains(v.description.as_deref())
            })
    }

    fn matches_severity(&self, record: &ScanRecord) -> bool {
        let Some(wanted) = self.severity.as_deref() else {
            return true;
        };
        record.findings().iter().any(|v| {
            v.severity
                .as_deref()
                .is_some_and(|s| s.to_lowercase() == wanted)
        })
    }

    fn matches_scan_type(&self, record: &ScanRecord) -> bool {
        match self.scan_type.as_deref() {
            None => true,
            Some(wanted) => record.scan_type.as_deref() == Some(wanted),
        }
    }

    fn matches_dates(&self, record: &ScanRecord) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        let Some(instant) = record.instant() else {
            return false;
        };
        self.date_from.map_or(true, |from| instant >= from)
            && self.date_to.map_or(true, |to| instant <= to)
    }

    fn matches_risk(&self, record: &ScanRecord) -> bool {
        if self.min_risk_score.is_none() && self.max_risk_score.is_none() {
            return true;
        }
        let Some(score) = record.risk_score else {
            return false;
        };
        self.min_risk_score.map_or(true, |min| score >= min)
            && self.max_risk_score.map_or(true, |max| score <= max)
    }
}

fn compare_by(key: SortKey, a: &ScanRecord, b: &ScanRecord) -> Ordering {
    match key {
        SortKey::Date => match (a.instant(), b.instant()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Url => a.url.cmp(&b.url),
        SortKey::Vulnerabilities => a.vulnerability_count().cmp(&b.vulnerability_count()),
        SortKey::Risk => a.risk_score_or_zero().cmp(&b.risk_score_or_zero()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bound(name: &str, raw: Option<String>) -> Result<Option<DateTime<Utc>>> {
    match non_blank(raw) {
        None => Ok(None),
        Some(raw) => timestamp::parse_bound(&raw).map(Some).ok_or_else(|| {
            ScanboardError::validation(format!(
                "Invalid {}: {}. Expected a date (YYYY-MM-DD) or an ISO-8601 timestamp",
                name, raw
            ))
            .into()
        }),
    }
}
