use crate::ports::outbound::ScanExporter;
use crate::scan_history::domain::ScanRecord;
use crate::shared::Result;

/// JsonExporter adapter: pretty-printed JSON with a 2-space indent
///
/// A single scan renders as one object, a bulk export as an array. Fields
/// the scanner produced beyond the known ones are carried through.
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanExporter for JsonExporter {
    fn export_scan(&self, scan: &ScanRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(scan)?)
    }

    fn export_scans(&self, scans: &[ScanRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(scans)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_history::domain::Vulnerability;

    #[test]
    fn test_export_scan_is_indented_object() {
        let scan = ScanRecord::new("s1", "https://a.example", "2026-01-01T10:00:00Z")
            .with_risk_score(40);

        let output = JsonExporter::new().export_scan(&scan).unwrap();

        assert!(output.starts_with("{\n  \"id\": \"s1\""));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["risk_score"], 40);
    }

    #[test]
    fn test_export_scans_is_array() {
        let scans = vec![
            ScanRecord::new("s1", "https://a.example", "2026-01-01T10:00:00Z"),
            ScanRecord::new("s2", "https://b.example", "2026-01-02T10:00:00Z")
                .with_vulnerabilities(vec![Vulnerability::new("XSS", "high")]),
        ];

        let output = JsonExporter::new().export_scans(&scans).unwrap();

        let parsed: Vec<ScanRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, scans);
    }

    #[test]
    fn test_export_scans_empty() {
        assert_eq!(JsonExporter::new().export_scans(&[]).unwrap(), "[]");
    }
}
