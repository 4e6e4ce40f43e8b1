/// Integration tests for the application layer
mod test_utilities;

use chrono::{DateTime, TimeZone, Utc};
use scanboard::application::use_cases::{NewSchedule, SchedulerUpdate};
use scanboard::prelude::*;
use scanboard::scan_history::services::{ComparisonStatus, SortKey, SortOrder};
use scanboard::shared::error::{ExitCode, ScanboardError};
use test_utilities::mocks::*;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Two scans of one shop plus an unrelated blog scan
fn sample_history() -> Vec<ScanRecord> {
    vec![
        ScanRecord::new("scan-1", "https://shop.example", "2026-03-01T10:00:00")
            .with_scan_type("basic")
            .with_risk_score(40)
            .with_vulnerabilities(vec![
                Vulnerability::new("XSS", "High").with_location("/search"),
                Vulnerability::new("SQL Injection", "Critical").with_location("/login"),
            ]),
        ScanRecord::new("scan-2", "https://blog.example", "2026-03-01T18:30:00Z")
            .with_scan_type("advanced")
            .with_vulnerabilities(vec![Vulnerability::new("Clickjacking", "weird")]),
        ScanRecord::new("scan-3", "https://shop.example", "2026-03-02T09:00:00")
            .with_scan_type("basic")
            .with_risk_score(25)
            .with_vulnerabilities(vec![
                Vulnerability::new("XSS", "High").with_location("/search"),
                Vulnerability::new("Missing HSTS", "Medium"),
            ]),
    ]
}

fn expect_scanboard_error(err: &anyhow::Error) -> &ScanboardError {
    err.downcast_ref::<ScanboardError>()
        .unwrap_or_else(|| panic!("expected ScanboardError, got: {:?}", err))
}

// ========== RecordScanUseCase tests ==========

#[tokio::test]
async fn test_record_scan_stores_runner_output() {
    let repository = MockScanRepository::new();
    let runner = MockScanRunner::returning(
        ScanRecord::new("", "", "2026-03-05T08:00:00")
            .with_risk_score(10)
            .with_vulnerabilities(vec![Vulnerability::new("Open Redirect", "Low")]),
    );
    let reporter = MockProgressReporter::new();
    let use_case = RecordScanUseCase::new(repository.clone(), runner.clone(), reporter.clone());

    let stored = use_case
        .execute(ScanRequest::new("https://shop.example", ScanKind::Advanced, None))
        .await
        .unwrap();

    assert!(!stored.id.is_empty());
    assert_eq!(stored.url, "https://shop.example");
    assert_eq!(stored.scan_type.as_deref(), Some("advanced"));
    assert_eq!(repository.stored(), vec![stored]);
    assert_eq!(
        runner.requests(),
        vec![("https://shop.example".to_string(), ScanKind::Advanced)]
    );
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Completed:")));
}

#[tokio::test]
async fn test_record_scan_failure_leaves_store_untouched() {
    let repository = MockScanRepository::with_records(sample_history());
    let reporter = MockProgressReporter::new();
    let use_case = RecordScanUseCase::new(
        repository.clone(),
        MockScanRunner::with_failure(),
        reporter.clone(),
    );

    let result = use_case
        .execute(ScanRequest::new("https://shop.example", ScanKind::Basic, None))
        .await;

    assert!(result.is_err());
    assert_eq!(repository.stored().len(), 3);
    assert!(reporter.get_messages().iter().any(|m| m.starts_with("Error:")));
}

#[tokio::test]
async fn test_record_scan_blank_url_is_rejected_before_running() {
    let runner = MockScanRunner::returning(ScanRecord::default());
    let use_case = RecordScanUseCase::new(
        MockScanRepository::new(),
        runner.clone(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(ScanRequest::new("   ", ScanKind::Basic, None))
        .await
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::InvalidArguments);
    assert!(runner.requests().is_empty());
}

// ========== ImportScanUseCase tests ==========

#[test]
fn test_import_keeps_existing_id_and_write_failure_propagates() {
    let reporter = MockProgressReporter::new();
    let use_case = ImportScanUseCase::new(MockScanRepository::new(), reporter.clone());
    let stored = use_case
        .execute(ScanRecord::new("manual-7", "https://shop.example", "2026-03-03"))
        .unwrap();
    assert_eq!(stored.id, "manual-7");
    assert_eq!(reporter.message_count(), 1);

    let failing = ImportScanUseCase::new(
        MockScanRepository::with_write_failure(),
        MockProgressReporter::new(),
    );
    assert!(failing
        .execute(ScanRecord::new("", "https://shop.example", "2026-03-03"))
        .is_err());
}

// ========== DashboardUseCase tests ==========

#[test]
fn test_dashboard_stats_over_history() {
    let dashboard = DashboardUseCase::new(
        MockScanRepository::with_records(sample_history()),
        MockSchedulerRepository::new(),
    );

    let stats = dashboard.stats();

    assert_eq!(stats.total_scans, 3);
    assert_eq!(stats.total_vulnerabilities, 5);
    assert_eq!(
        stats.severity_counts,
        SeverityCounts {
            critical: 1,
            high: 2,
            medium: 1,
            low: 1,
        }
    );
    // (40 + 25) / 2 rounded; the unscored blog scan is not averaged
    assert_eq!(stats.average_risk_score, 33);
    assert_eq!(stats.recent_scans[0].id, "scan-3");
}

#[test]
fn test_dashboard_trends_group_by_day() {
    let dashboard = DashboardUseCase::new(
        MockScanRepository::with_records(sample_history()),
        MockSchedulerRepository::new(),
    );

    let trends = dashboard.trends();

    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0].date, "2026-03-01");
    assert_eq!(trends[0].scans, 2);
    assert_eq!(trends[0].total, 3);
    assert_eq!(trends[1].date, "2026-03-02");
    assert_eq!(trends[1].medium, 1);
}

#[test]
fn test_dashboard_realtime_counts_windows_and_schedulers() {
    let now = at(2026, 3, 2, 12);
    let enabled = SchedulerEntry {
        id: "scheduler-1".to_string(),
        name: "Nightly".to_string(),
        url: "https://shop.example".to_string(),
        frequency: Frequency::Daily,
        scan_type: "basic".to_string(),
        enabled: true,
        created_at: at(2026, 2, 1, 0),
        last_run: None,
        next_run: at(2026, 3, 3, 0),
        total_runs: 0,
    };
    let disabled = SchedulerEntry {
        id: "scheduler-2".to_string(),
        enabled: false,
        ..enabled.clone()
    };
    let dashboard = DashboardUseCase::new(
        MockScanRepository::with_records(sample_history()),
        MockSchedulerRepository::with_entries(vec![enabled, disabled]),
    );

    let realtime = dashboard.realtime(now);

    assert_eq!(realtime.total_scans, 3);
    assert_eq!(realtime.scans_last_24h, 2);
    assert_eq!(realtime.scans_last_week, 3);
    assert_eq!(realtime.active_schedulers, 1);
    assert_eq!(realtime.total_schedulers, 2);
    // (40 + 0 + 25) / 3 rounded
    assert_eq!(realtime.average_risk_score, 22);
    assert_eq!(realtime.last_scan.map(|s| s.id), Some("scan-3".to_string()));
}

#[test]
fn test_dashboard_timeline_for_url() {
    let dashboard = DashboardUseCase::new(
        MockScanRepository::with_records(sample_history()),
        MockSchedulerRepository::new(),
    );

    let timeline = dashboard.timeline("https://shop.example").unwrap();
    let ids: Vec<&str> = timeline.timeline.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["scan-1", "scan-3"]);
    assert_eq!(timeline.timeline[1].risk_score, 25);

    assert!(dashboard.timeline("").is_err());
}

// ========== CompareScansUseCase tests ==========

#[test]
fn test_compare_shop_scans() {
    let use_case = CompareScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let report = use_case.compare("scan-1", "scan-3").unwrap();

    assert_eq!(report.summary.new_count, 1);
    assert_eq!(report.summary.fixed_count, 1);
    assert_eq!(report.summary.common_count, 1);
    assert_eq!(report.summary.status, ComparisonStatus::Deteriorated);
    assert_eq!(report.differences.risk_score_change, -15);
    assert_eq!(
        report.fixed_vulnerabilities[0].kind.as_deref(),
        Some("SQL Injection")
    );
}

#[test]
fn test_compare_by_type_shop_scans() {
    let use_case = CompareScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let comparison = use_case.compare_by_type("scan-1", "scan-3").unwrap();

    assert_eq!(
        comparison.differences.new_vuln_types,
        vec![Some("Missing HSTS".to_string())]
    );
    assert_eq!(
        comparison.differences.fixed_vuln_types,
        vec![Some("SQL Injection".to_string())]
    );
    assert_eq!(comparison.differences.total_change, 0);
    assert!(!comparison.differences.improvement);
}

#[test]
fn test_compare_missing_scan_is_not_found() {
    let use_case = CompareScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let err = use_case.compare("scan-1", "scan-404").unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::NotFound);
    match expect_scanboard_error(&err) {
        ScanboardError::ScansNotFound { ids } => assert_eq!(ids, &vec!["scan-404".to_string()]),
        other => panic!("unexpected error: {:?}", other),
    }
}

// ========== ExportScansUseCase tests ==========

#[test]
fn test_export_one_csv() {
    let use_case = ExportScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let artifact = use_case.export_one("scan-3", ExportFormat::Csv).unwrap();

    assert_eq!(artifact.file_name, "scan-scan-3.csv");
    assert_eq!(artifact.content_type, ExportFormat::Csv.content_type());
    // header plus one row per finding
    assert_eq!(artifact.body.lines().count(), 3);
    assert!(artifact.body.contains("\"Missing HSTS\""));
}

#[test]
fn test_export_many_skips_unknown_ids_in_store_order() {
    let use_case = ExportScansUseCase::new(MockScanRepository::with_records(sample_history()));
    let ids = vec![
        "scan-3".to_string(),
        "missing".to_string(),
        "scan-1".to_string(),
    ];

    let artifact = use_case.export_many(&ids, ExportFormat::Json).unwrap();
    let exported: Vec<ScanRecord> = serde_json::from_str(&artifact.body).unwrap();

    assert_eq!(artifact.file_name, "scans-bulk-export.json");
    let exported_ids: Vec<&str> = exported.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(exported_ids, vec!["scan-1", "scan-3"]);
}

#[test]
fn test_export_many_errors() {
    let use_case = ExportScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let empty = use_case.export_many(&[], ExportFormat::Text).unwrap_err();
    assert_eq!(ExitCode::for_error(&empty), ExitCode::InvalidArguments);

    let none = use_case
        .export_many(&["nope".to_string()], ExportFormat::Text)
        .unwrap_err();
    assert_eq!(ExitCode::for_error(&none), ExitCode::NotFound);
}

// ========== SearchScansUseCase tests ==========

#[test]
fn test_search_filters_and_sorts() {
    let use_case = SearchScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let results = use_case
        .search(ScanQuery {
            query: Some("SHOP".to_string()),
            sort_by: Some(SortKey::Risk),
            sort_order: SortOrder::Asc,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(results.total, 2);
    assert_eq!(results.scans[0].id, "scan-3");
    assert_eq!(results.scans[1].id, "scan-1");
}

#[test]
fn test_search_by_severity_and_date_range() {
    let use_case = SearchScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let critical = use_case
        .search(ScanQuery {
            severity: Some("critical".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(critical.total, 1);
    assert_eq!(critical.scans[0].id, "scan-1");

    let second_day = use_case
        .search(ScanQuery {
            date_from: Some("2026-03-02".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(second_day.total, 1);
    assert_eq!(second_day.scans[0].id, "scan-3");
}

#[test]
fn test_search_rejects_inverted_risk_range() {
    let use_case = SearchScansUseCase::new(MockScanRepository::with_records(sample_history()));

    let err = use_case
        .search(ScanQuery {
            min_risk_score: Some(50),
            max_risk_score: Some(10),
            ..Default::default()
        })
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::InvalidArguments);
}

// ========== ManageSchedulersUseCase tests ==========

#[test]
fn test_scheduler_lifecycle() {
    let repository = MockSchedulerRepository::new();
    let use_case = ManageSchedulersUseCase::new(repository.clone());
    let now = at(2026, 1, 31, 9);

    let created = use_case
        .create(
            NewSchedule {
                name: "Monthly audit".to_string(),
                url: "https://shop.example".to_string(),
                frequency: Frequency::Monthly,
                scan_type: None,
                enabled: None,
            },
            now,
        )
        .unwrap();
    assert_eq!(created.scan_type, "basic");
    assert!(created.enabled);
    assert_eq!(created.next_run, at(2026, 2, 28, 9));

    let updated = use_case
        .update(
            &created.id,
            SchedulerUpdate {
                frequency: Some(Frequency::Weekly),
                enabled: Some(false),
                ..Default::default()
            },
            now,
        )
        .unwrap();
    assert_eq!(updated.next_run, at(2026, 2, 7, 9));
    assert!(!updated.enabled);
    assert_eq!(repository.stored(), vec![updated.clone()]);

    assert_eq!(use_case.delete(&created.id).unwrap(), 1);
    assert_eq!(use_case.delete(&created.id).unwrap(), 0);
    assert!(use_case.list().is_empty());
}

#[test]
fn test_scheduler_update_unknown_id() {
    let use_case = ManageSchedulersUseCase::new(MockSchedulerRepository::new());

    let err = use_case
        .update("scheduler-0", SchedulerUpdate::default(), at(2026, 1, 1, 0))
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::NotFound);
}
