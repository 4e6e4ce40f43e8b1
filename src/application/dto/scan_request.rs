use crate::shared::error::ScanboardError;
use serde_json::Value;

/// Scanner tier requested for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanKind {
    #[default]
    Basic,
    Advanced,
    Ultimate,
}

impl ScanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanKind::Basic => "basic",
            ScanKind::Advanced => "advanced",
            ScanKind::Ultimate => "ultimate",
        }
    }

    /// Whether the scanner for this tier takes a JSON configuration argument
    pub fn takes_config(&self) -> bool {
        !matches!(self, ScanKind::Basic)
    }
}

impl std::str::FromStr for ScanKind {
    type Err = ScanboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(ScanKind::Basic),
            "advanced" => Ok(ScanKind::Advanced),
            "ultimate" => Ok(ScanKind::Ultimate),
            _ => Err(ScanboardError::validation(format!(
                "Invalid scan kind: {}. Please specify 'basic', 'advanced' or 'ultimate'",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ScanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ScanRequest - request DTO for running a scan
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Target URL
    pub url: String,
    pub kind: ScanKind,
    /// Scanner options, passed through as JSON (ignored for basic scans)
    pub config: Value,
}

impl ScanRequest {
    pub fn new(url: impl Into<String>, kind: ScanKind, config: Option<Value>) -> Self {
        Self {
            url: url.into(),
            kind,
            config: config.unwrap_or_else(|| Value::Object(Default::default())),
        }
    }
}
