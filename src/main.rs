mod cli;

use anyhow::Context;
use chrono::Utc;
use cli::{Args, Command, SchedulerCommand, SearchArgs};
use scanboard::adapters::outbound::console::StderrProgressReporter;
use scanboard::adapters::outbound::filesystem::{
    JsonFileScanRepository, JsonFileSchedulerRepository,
};
use scanboard::adapters::outbound::process::ProcessScanRunner;
use scanboard::application::dto::{ExportFormat, ScanRequest};
use scanboard::application::factories::{PresenterFactory, PresenterType};
use scanboard::application::use_cases::{
    CompareScansUseCase, DashboardUseCase, ExportScansUseCase, ImportScanUseCase,
    ManageSchedulersUseCase, NewSchedule, RecordScanUseCase, SchedulerUpdate, SearchScansUseCase,
};
use scanboard::config::{discover_config, load_config_from_path, Settings};
use scanboard::ports::outbound::{OutputPresenter, ScanRepository};
use scanboard::scan_history::domain::ScanRecord;
use scanboard::scan_history::services::ScanQuery;
use scanboard::shared::error::{ExitCode, ScanboardError};
use scanboard::shared::Result;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = match args.config {
        Some(ref path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(config, args.data_dir);
    log::debug!("Using scan store {}", settings.scans_path.display());

    let scans = JsonFileScanRepository::new(settings.scans_path.clone());
    let schedulers = JsonFileSchedulerRepository::new(settings.schedulers_path.clone());

    match args.command {
        Command::Scan {
            url,
            kind,
            scanner_config,
        } => {
            let config = scanner_config
                .as_deref()
                .map(parse_scanner_config)
                .transpose()?;
            let runner = ProcessScanRunner::new(
                settings.scanner_program,
                settings.scanner_scripts,
                settings.scanner_timeout,
            );
            let use_case = RecordScanUseCase::new(scans, runner, StderrProgressReporter::new());
            let record = use_case.execute(ScanRequest::new(url, kind, config)).await?;
            print_json(&record)
        }
        Command::Import { file } => {
            let record = read_record(&file)?;
            let use_case = ImportScanUseCase::new(scans, StderrProgressReporter::new());
            print_json(&use_case.execute(record)?)
        }
        Command::List => print_json(&scans.load_all()),
        Command::Show { id } => {
            let record = scans
                .find_by_id(&id)
                .ok_or(ScanboardError::ScanNotFound { id })?;
            print_json(&record)
        }
        Command::Stats => print_json(&DashboardUseCase::new(scans, schedulers).stats()),
        Command::Trends => print_json(&DashboardUseCase::new(scans, schedulers).trends()),
        Command::Realtime => {
            print_json(&DashboardUseCase::new(scans, schedulers).realtime(Utc::now()))
        }
        Command::Timeline { url } => {
            print_json(&DashboardUseCase::new(scans, schedulers).timeline(&url)?)
        }
        Command::Compare {
            older,
            newer,
            by_type,
        } => {
            let use_case = CompareScansUseCase::new(scans);
            if by_type {
                print_json(&use_case.compare_by_type(&older, &newer)?)
            } else {
                print_json(&use_case.compare(&older, &newer)?)
            }
        }
        Command::Export { id, format, output } => {
            let format = ExportFormat::from_str(&format)?;
            let artifact = ExportScansUseCase::new(scans).export_one(&id, format)?;
            log::debug!(
                "Rendered {} ({})",
                artifact.file_name,
                artifact.content_type
            );
            present(output, &artifact.body)
        }
        Command::ExportBulk {
            ids,
            format,
            output,
        } => {
            let format = ExportFormat::from_str(&format)?;
            let artifact = ExportScansUseCase::new(scans).export_many(&ids, format)?;
            log::debug!(
                "Rendered {} ({})",
                artifact.file_name,
                artifact.content_type
            );
            present(output, &artifact.body)
        }
        Command::Search(search) => {
            print_json(&SearchScansUseCase::new(scans).search(to_query(search))?)
        }
        Command::Scheduler(command) => run_scheduler(command, schedulers),
    }
}

fn run_scheduler(command: SchedulerCommand, schedulers: JsonFileSchedulerRepository) -> Result<()> {
    let use_case = ManageSchedulersUseCase::new(schedulers);
    match command {
        SchedulerCommand::List => print_json(&use_case.list()),
        SchedulerCommand::Add {
            name,
            url,
            frequency,
            scan_type,
            disabled,
        } => {
            let entry = use_case.create(
                NewSchedule {
                    name,
                    url,
                    frequency,
                    scan_type,
                    enabled: Some(!disabled),
                },
                Utc::now(),
            )?;
            print_json(&entry)
        }
        SchedulerCommand::Update {
            id,
            name,
            url,
            frequency,
            scan_type,
            enabled,
        } => {
            let update = SchedulerUpdate {
                name,
                url,
                frequency,
                scan_type,
                enabled,
            };
            if update.is_empty() {
                return Err(ScanboardError::validation("Nothing to update").into());
            }
            print_json(&use_case.update(&id, update, Utc::now())?)
        }
        SchedulerCommand::Delete { id } => {
            let removed = use_case.delete(&id)?;
            log::info!("Removed {} scheduler(s) with id {}", removed, id);
            print_json(&serde_json::json!({ "success": true }))
        }
    }
}

fn to_query(search: SearchArgs) -> ScanQuery {
    ScanQuery {
        query: search.query,
        severity: search.severity,
        scan_type: search.scan_type,
        date_from: search.date_from,
        date_to: search.date_to,
        min_risk_score: search.min_risk,
        max_risk_score: search.max_risk,
        sort_by: search.sort_by,
        sort_order: search.order,
    }
}

fn parse_scanner_config(raw: &str) -> Result<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        ScanboardError::validation(format!("--scanner-config is not valid JSON: {}", e))
    })?;
    if !value.is_object() {
        return Err(ScanboardError::validation("--scanner-config must be a JSON object").into());
    }
    Ok(value)
}

/// Reads one scan record from a file, or from stdin for `-`
fn read_record(file: &Path) -> Result<ScanRecord> {
    let content = if file == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read scan record from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read scan record: {}", file.display()))?
    };

    serde_json::from_str(&content).map_err(|e| {
        ScanboardError::validation(format!("Scan record is not a valid JSON object: {}", e)).into()
    })
}

fn present(output: Option<PathBuf>, content: &str) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> =
        PresenterFactory::create(PresenterType::from_output(output));
    presenter.present(content)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    PresenterFactory::create(PresenterType::Stdout).present(&json)
}
