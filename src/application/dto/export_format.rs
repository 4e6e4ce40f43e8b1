use crate::shared::error::ScanboardError;

/// Export format enumeration
///
/// Shared by the CLI, which parses it from user input, and the exporter
/// factory, which picks the matching adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values, one row per vulnerability
    Csv,
    /// Plain-text report
    Text,
}

impl ExportFormat {
    /// File extension used in export file names
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Text => "text/plain",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ScanboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "text" => Ok(ExportFormat::Text),
            _ => Err(ScanboardError::InvalidExportFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("txt").unwrap(), ExportFormat::Text);
        assert_eq!(ExportFormat::from_str("text").unwrap(), ExportFormat::Text);
    }

    #[test]
    fn test_export_format_from_str_case_insensitive() {
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("Csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("TEXT").unwrap(), ExportFormat::Text);
    }

    #[test]
    fn test_export_format_from_str_invalid() {
        let error = ExportFormat::from_str("xml").unwrap_err();
        assert!(matches!(
            error,
            ScanboardError::InvalidExportFormat { ref format } if format == "xml"
        ));
        assert!(error.to_string().contains("json, csv, or txt"));
    }

    #[test]
    fn test_export_format_from_str_empty() {
        assert!(ExportFormat::from_str("").is_err());
    }

    #[test]
    fn test_export_format_extension_and_content_type() {
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }
}
