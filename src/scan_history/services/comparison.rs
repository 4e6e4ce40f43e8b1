use crate::scan_history::domain::{ScanRecord, SeverityCounts, Vulnerability};
use serde::Serialize;
use std::collections::HashSet;

/// Set difference of two scans' findings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VulnerabilityDiff {
    /// In the newer scan, absent from the older one
    pub new: Vec<Vulnerability>,
    /// In the older scan, absent from the newer one
    pub fixed: Vec<Vulnerability>,
    /// In both; entries are taken from the older scan
    pub common: Vec<Vulnerability>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    Deteriorated,
    Improved,
    Unchanged,
}

impl ComparisonStatus {
    /// New findings win over fixed ones: a scan with both is deteriorated
    pub fn from_diff(diff: &VulnerabilityDiff) -> Self {
        if !diff.new.is_empty() {
            ComparisonStatus::Deteriorated
        } else if !diff.fixed.is_empty() {
            ComparisonStatus::Improved
        } else {
            ComparisonStatus::Unchanged
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOverview {
    pub id: String,
    pub url: String,
    pub timestamp: String,
    pub risk_score: i64,
    pub vulnerability_count: usize,
}

impl ScanOverview {
    fn of(scan: &ScanRecord) -> Self {
        Self {
            id: scan.id.clone(),
            url: scan.url.clone(),
            timestamp: scan.timestamp.clone(),
            risk_score: scan.risk_score_or_zero(),
            vulnerability_count: scan.vulnerability_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDifferences {
    pub risk_score_change: i64,
    pub vulnerability_count_change: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub new_count: usize,
    pub fixed_count: usize,
    pub common_count: usize,
    pub status: ComparisonStatus,
}

/// Full comparison keyed by `(type, location)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub scan1: ScanOverview,
    pub scan2: ScanOverview,
    pub differences: ScoreDifferences,
    pub new_vulnerabilities: Vec<Vulnerability>,
    pub fixed_vulnerabilities: Vec<Vulnerability>,
    pub common_vulnerabilities: Vec<Vulnerability>,
    pub summary: ComparisonSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScanOverview {
    pub id: String,
    pub url: String,
    pub timestamp: String,
    pub total_vulnerabilities: usize,
    pub risk_score: i64,
    pub severity_counts: SeverityCounts,
}

impl TypeScanOverview {
    fn of(scan: &ScanRecord) -> Self {
        Self {
            id: scan.id.clone(),
            url: scan.url.clone(),
            timestamp: scan.timestamp.clone(),
            total_vulnerabilities: scan.vulnerability_count(),
            risk_score: scan.risk_score_or_zero(),
            severity_counts: scan.severity_counts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDifferences {
    pub new_vulnerabilities: usize,
    pub fixed_vulnerabilities: usize,
    pub common_vulnerabilities: usize,
    pub new_vuln_types: Vec<Option<String>>,
    pub fixed_vuln_types: Vec<Option<String>>,
    pub total_change: i64,
    pub risk_score_change: i64,
    /// True only when the newer risk score is strictly higher
    pub improvement: bool,
}

/// Coarse comparison keyed by vulnerability type alone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeComparison {
    pub scan1: TypeScanOverview,
    pub scan2: TypeScanOverview,
    pub differences: TypeDifferences,
}

/// Comparison engine
///
/// Two matching strategies are exposed and their results differ:
/// `summarize_comparison` keys findings by `(type, location)` and classifies
/// the change from the diff, while `compare_by_type` keys by type only and
/// reports `improvement` from the risk scores.
pub struct ScanComparator;

impl ScanComparator {
    pub fn diff_vulnerabilities(older: &ScanRecord, newer: &ScanRecord) -> VulnerabilityDiff {
        let old_findings = older.findings();
        let new_findings = newer.findings();
        let old_keys: HashSet<_> = old_findings.iter().map(Vulnerability::key).collect();
        let new_keys: HashSet<_> = new_findings.iter().map(Vulnerability::key).collect();

        VulnerabilityDiff {
            new: new_findings
                .iter()
                .filter(|v| !old_keys.contains(&v.key()))
                .cloned()
                .collect(),
            fixed: old_findings
                .iter()
                .filter(|v| !new_keys.contains(&v.key()))
                .cloned()
                .collect(),
            common: old_findings
                .iter()
                .filter(|v| new_keys.contains(&v.key()))
                .cloned()
                .collect(),
        }
    }

    pub fn summarize_comparison(older: &ScanRecord, newer: &ScanRecord) -> ComparisonReport {
        let diff = Self::diff_vulnerabilities(older, newer);
        let status = ComparisonStatus::from_diff(&diff);

        ComparisonReport {
            scan1: ScanOverview::of(older),
            scan2: ScanOverview::of(newer),
            differences: ScoreDifferences {
                risk_score_change: newer.risk_score_or_zero() - older.risk_score_or_zero(),
                vulnerability_count_change: count_change(older, newer),
            },
            summary: ComparisonSummary {
                new_count: diff.new.len(),
                fixed_count: diff.fixed.len(),
                common_count: diff.common.len(),
                status,
            },
            new_vulnerabilities: diff.new,
            fixed_vulnerabilities: diff.fixed,
            common_vulnerabilities: diff.common,
        }
    }

    pub fn compare_by_type(older: &ScanRecord, newer: &ScanRecord) -> TypeComparison {
        let old_types = distinct_types(older);
        let new_types = distinct_types(newer);

        let new_vuln_types: Vec<Option<String>> = new_types
            .iter()
            .filter(|t| !old_types.contains(t))
            .cloned()
            .collect();
        let fixed_vuln_types: Vec<Option<String>> = old_types
            .iter()
            .filter(|t| !new_types.contains(t))
            .cloned()
            .collect();
        let common = old_types.iter().filter(|t| new_types.contains(t)).count();

        TypeComparison {
            scan1: TypeScanOverview::of(older),
            scan2: TypeScanOverview::of(newer),
            differences: TypeDifferences {
                new_vulnerabilities: new_vuln_types.len(),
                fixed_vulnerabilities: fixed_vuln_types.len(),
                common_vulnerabilities: common,
                new_vuln_types,
                fixed_vuln_types,
                total_change: count_change(older, newer),
                risk_score_change: newer.risk_score_or_zero() - older.risk_score_or_zero(),
                improvement: newer.risk_score_or_zero() > older.risk_score_or_zero(),
            },
        }
    }
}

fn count_change(older: &ScanRecord, newer: &ScanRecord) -> i64 {
    newer.vulnerability_count() as i64 - older.vulnerability_count() as i64
}

/// Distinct vulnerability types in order of first appearance
fn distinct_types(scan: &ScanRecord) -> Vec<Option<String>> {
    let mut seen = HashSet::new();
    scan.findings()
        .iter()
        .filter(|v| seen.insert(v.kind.clone()))
        .map(|v| v.kind.clone())
        .collect()
}
