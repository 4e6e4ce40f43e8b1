use clap::{Parser, Subcommand};
use scanboard::application::dto::ScanKind;
use scanboard::scan_history::domain::Frequency;
use scanboard::scan_history::services::{SortKey, SortOrder};
use std::path::PathBuf;

/// Scan history store, dashboard statistics and exports for web vulnerability scans
#[derive(Parser, Debug)]
#[command(name = "scanboard")]
#[command(version)]
#[command(about = "Store, compare and export web vulnerability scan results", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./scanboard.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding scans.json and schedulers.json
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a scanner against a URL and store the result
    Scan {
        url: String,
        /// Scanner tier: basic, advanced or ultimate
        #[arg(short, long, default_value = "basic")]
        kind: ScanKind,
        /// Scanner options as a JSON object (advanced and ultimate only)
        #[arg(long, value_name = "JSON")]
        scanner_config: Option<String>,
    },
    /// Store a scan result produced elsewhere (a file, or - for stdin)
    Import { file: PathBuf },
    /// Print every stored scan
    List,
    /// Print one scan
    Show { id: String },
    /// Headline statistics
    Stats,
    /// Per-day vulnerability counts
    Trends,
    /// Live statistics including scheduler counts
    Realtime,
    /// History of one target URL, oldest first
    Timeline { url: String },
    /// Compare an older scan with a newer one
    Compare {
        older: String,
        newer: String,
        /// Compare by vulnerability type only
        #[arg(long)]
        by_type: bool,
    },
    /// Export one scan
    Export {
        id: String,
        /// Export format: json, csv or txt
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export several scans into one document
    ExportBulk {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Export format: json, csv or txt
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Filter and sort stored scans
    Search(SearchArgs),
    /// Manage scan schedules
    #[command(subcommand)]
    Scheduler(SchedulerCommand),
}

#[derive(clap::Args, Debug, Default)]
pub struct SearchArgs {
    /// Text matched against url, scan type and findings
    #[arg(short, long)]
    pub query: Option<String>,
    /// Severity of at least one finding (or "all")
    #[arg(long)]
    pub severity: Option<String>,
    #[arg(long)]
    pub scan_type: Option<String>,
    /// Earliest timestamp (YYYY-MM-DD or ISO-8601)
    #[arg(long = "from", value_name = "DATE")]
    pub date_from: Option<String>,
    /// Latest timestamp (YYYY-MM-DD or ISO-8601)
    #[arg(long = "to", value_name = "DATE")]
    pub date_to: Option<String>,
    #[arg(long)]
    pub min_risk: Option<i64>,
    #[arg(long)]
    pub max_risk: Option<i64>,
    /// Sort key: date, url, vulnerabilities or risk
    #[arg(long)]
    pub sort_by: Option<SortKey>,
    /// Sort order: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
}

#[derive(Subcommand, Debug)]
pub enum SchedulerCommand {
    /// Print every schedule
    List,
    /// Create a schedule
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
        /// daily, weekly or monthly
        #[arg(long)]
        frequency: Frequency,
        #[arg(long)]
        scan_type: Option<String>,
        /// Create the schedule disabled
        #[arg(long)]
        disabled: bool,
    },
    /// Change fields of a schedule
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        frequency: Option<Frequency>,
        #[arg(long)]
        scan_type: Option<String>,
        #[arg(long)]
        enabled: Option<bool>,
    },
    /// Remove a schedule
    Delete { id: String },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
