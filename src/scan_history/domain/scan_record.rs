use super::severity::{Severity, SeverityCounts};
use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// One finding within a scan
///
/// All fields are optional because the external scanners are not
/// consistent about what they emit. Fields this crate does not model are
/// carried in `extra` so a load/save cycle never drops data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Vulnerability {
    pub fn new(kind: &str, severity: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            severity: Some(severity.to_string()),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        self.recommendation = Some(recommendation.to_string());
        self
    }

    pub fn severity_bucket(&self) -> Severity {
        Severity::classify(self.severity.as_deref())
    }

    /// Matching key used when diffing two scans
    pub fn key(&self) -> (Option<&str>, Option<&str>) {
        (self.kind.as_deref(), self.location.as_deref())
    }
}

/// One completed vulnerability scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerabilities: Option<Vec<Vulnerability>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScanRecord {
    pub fn new(id: &str, url: &str, timestamp: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            timestamp: timestamp.to_string(),
            ..Self::default()
        }
    }

    pub fn with_risk_score(mut self, risk_score: i64) -> Self {
        self.risk_score = Some(risk_score);
        self
    }

    pub fn with_scan_type(mut self, scan_type: &str) -> Self {
        self.scan_type = Some(scan_type.to_string());
        self
    }

    pub fn with_vulnerabilities(mut self, vulnerabilities: Vec<Vulnerability>) -> Self {
        self.vulnerabilities = Some(vulnerabilities);
        self
    }

    /// Findings of this scan; an absent list reads as empty
    pub fn findings(&self) -> &[Vulnerability] {
        self.vulnerabilities.as_deref().unwrap_or(&[])
    }

    pub fn vulnerability_count(&self) -> usize {
        self.findings().len()
    }

    /// Risk score with a missing value read as 0
    pub fn risk_score_or_zero(&self) -> i64 {
        self.risk_score.unwrap_or(0)
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::new();
        for vulnerability in self.findings() {
            counts.record(vulnerability.severity_bucket());
        }
        counts
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        timestamp::parse_instant(&self.timestamp)
    }

    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Assigns a fresh UUID when the scanner did not provide an id
    pub fn with_assigned_id(mut self) -> Self {
        if !self.has_id() {
            self.id = Uuid::new_v4().to_string();
        }
        self
    }
}
