use crate::ports::outbound::ScanExporter;
use crate::scan_history::domain::{timestamp, ScanRecord};
use crate::shared::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt::{self, Write};

const BANNER_WIDTH: usize = 80;

/// Indonesian (`id-ID`) short date-time form, e.g. `5/1/2026, 09.07.03`
const INDONESIAN_DATETIME: &str = "%-d/%-m/%Y, %H.%M.%S";

fn indonesian(datetime: &NaiveDateTime) -> String {
    datetime.format(INDONESIAN_DATETIME).to_string()
}

/// Renders a stored timestamp for a report, keeping the raw text when it
/// cannot be parsed
fn display_timestamp(raw: &str) -> String {
    timestamp::parse_wall_clock(raw)
        .map(|dt| indonesian(&dt))
        .unwrap_or_else(|| raw.to_string())
}

fn risk_score(scan: &ScanRecord) -> String {
    scan.risk_score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

/// TextExporter adapter producing human-readable reports
///
/// The single-scan report lists every finding with all of its fields; the
/// bulk report is more compact, one block per scan separated by rules.
pub struct TextExporter {
    generated_at: Option<DateTime<Utc>>,
}

impl TextExporter {
    pub fn new() -> Self {
        Self { generated_at: None }
    }

    /// Fixes the `Generated:` time of bulk reports
    pub fn with_generated_at(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: Some(generated_at),
        }
    }

    fn render_scan_block(
        output: &mut String,
        scan: &ScanRecord,
        index: usize,
        total: usize,
    ) -> fmt::Result {
        let findings = scan.findings();

        writeln!(output, "SCAN {}/{}", index + 1, total)?;
        writeln!(output, "ID: {}", scan.id)?;
        writeln!(output, "URL: {}", scan.url)?;
        writeln!(output, "Timestamp: {}", display_timestamp(&scan.timestamp))?;
        writeln!(output, "Risk Score: {}", risk_score(scan))?;
        writeln!(output, "Total Vulnerabilities: {}\n", findings.len())?;

        if findings.is_empty() {
            output.push_str("No vulnerabilities found.\n\n");
        } else {
            output.push_str("Vulnerabilities:\n");
            for (i, v) in findings.iter().enumerate() {
                writeln!(
                    output,
                    "  {}. [{}] {}",
                    i + 1,
                    or(&v.severity, "N/A"),
                    or(&v.kind, "Unknown")
                )?;
                writeln!(output, "     {}", or(&v.description, "No description"))?;
                if let Some(location) = &v.location {
                    writeln!(output, "     Location: {}", location)?;
                }
                output.push('\n');
            }
        }

        writeln!(output, "{}\n", "-".repeat(BANNER_WIDTH))
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanExporter for TextExporter {
    fn export_scan(&self, scan: &ScanRecord) -> Result<String> {
        let findings = scan.findings();
        let mut output = String::from("=== VULNERABILITY SCAN REPORT ===\n\n");

        writeln!(output, "Scan ID: {}", scan.id)?;
        writeln!(output, "URL: {}", scan.url)?;
        writeln!(output, "Timestamp: {}", display_timestamp(&scan.timestamp))?;
        writeln!(output, "Risk Score: {}", risk_score(scan))?;
        writeln!(output, "Total Vulnerabilities: {}\n", findings.len())?;

        if !findings.is_empty() {
            output.push_str("=== VULNERABILITIES ===\n\n");
            for (i, v) in findings.iter().enumerate() {
                writeln!(output, "{}. {}", i + 1, or(&v.kind, "Unknown"))?;
                writeln!(output, "   Severity: {}", or(&v.severity, "N/A"))?;
                writeln!(output, "   Description: {}", or(&v.description, "N/A"))?;
                writeln!(output, "   Location: {}", or(&v.location, "N/A"))?;
                writeln!(
                    output,
                    "   Recommendation: {}\n",
                    or(&v.recommendation, "N/A")
                )?;
            }
        }

        Ok(output)
    }

    fn export_scans(&self, scans: &[ScanRecord]) -> Result<String> {
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let mut output = String::from("=== BULK VULNERABILITY SCAN REPORT ===\n\n");

        writeln!(output, "Total Scans: {}", scans.len())?;
        writeln!(
            output,
            "Generated: {}\n",
            indonesian(&generated_at.naive_utc())
        )?;
        writeln!(output, "{}\n", "=".repeat(BANNER_WIDTH))?;

        for (index, scan) in scans.iter().enumerate() {
            Self::render_scan_block(&mut output, scan, index, scans.len())?;
        }

        Ok(output)
    }
}
