use crate::ports::outbound::ScanExporter;
use crate::scan_history::domain::ScanRecord;
use crate::shared::Result;

const SINGLE_HEADER: &str = "Type,Severity,Description,Location,Recommendation";
const BULK_HEADER: &str = "Scan ID,URL,Timestamp,Vulnerability Type,Severity,Description,Location";
const NO_VULNERABILITIES: &str = "No vulnerabilities";

/// CsvExporter adapter
///
/// One row per vulnerability. Every field is double-quoted and embedded
/// quotes are doubled, so descriptions containing `"` or `,` stay in their
/// column. Missing values render as empty fields.
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a single field (RFC 4180)
    fn quote(value: &str) -> String {
        format!("\"{}\"", value.replace('"', "\"\""))
    }

    fn row(fields: &[&str]) -> String {
        let cells: Vec<String> = fields.iter().map(|f| Self::quote(f)).collect();
        format!("{}\n", cells.join(","))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl ScanExporter for CsvExporter {
    fn export_scan(&self, scan: &ScanRecord) -> Result<String> {
        let mut output = format!("{}\n", SINGLE_HEADER);
        for v in scan.findings() {
            output.push_str(&Self::row(&[
                text(&v.kind),
                text(&v.severity),
                text(&v.description),
                text(&v.location),
                text(&v.recommendation),
            ]));
        }
        Ok(output)
    }

    fn export_scans(&self, scans: &[ScanRecord]) -> Result<String> {
        let mut output = format!("{}\n", BULK_HEADER);
        for scan in scans {
            let findings = scan.findings();
            if findings.is_empty() {
                output.push_str(&Self::row(&[
                    &scan.id,
                    &scan.url,
                    &scan.timestamp,
                    NO_VULNERABILITIES,
                    "",
                    "",
                    "",
                ]));
                continue;
            }
            for v in findings {
                output.push_str(&Self::row(&[
                    &scan.id,
                    &scan.url,
                    &scan.timestamp,
                    text(&v.kind),
                    text(&v.severity),
                    text(&v.description),
                    text(&v.location),
                ]));
            }
        }
        Ok(output)
    }
}
