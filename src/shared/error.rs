use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a missing record from a bad
/// invocation or an infrastructure failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// A requested scan or schedule does not exist
    NotFound = 1,
    /// Invalid command-line arguments or request values
    InvalidArguments = 2,
    /// Application error (scanner failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code the CLI should return
    pub fn for_error(error: &anyhow::Error) -> Self {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ScanboardError>())
            .map(ScanboardError::exit_code)
            .unwrap_or(ExitCode::ApplicationError)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// A corrupt or unreadable store has no variant here: the stores recover
/// from it locally and report an empty history instead.
#[derive(Debug, Error)]
pub enum ScanboardError {
    #[error("Scan not found: {id}\n\n💡 Hint: Run `scanboard list` to see stored scan ids")]
    ScanNotFound { id: String },

    #[error("Scans not found: {}\n\n💡 Hint: Run `scanboard list` to see stored scan ids", .ids.join(", "))]
    ScansNotFound { ids: Vec<String> },

    #[error("Scheduler not found: {id}\n\n💡 Hint: Run `scanboard scheduler list` to see scheduler ids")]
    SchedulerNotFound { id: String },

    #[error("Invalid export format: {format}\n\n💡 Hint: Use json, csv, or txt")]
    InvalidExportFormat { format: String },

    /// Validation error for request values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Scan failed: {details}\n\n💡 Hint: Check that the scanner script exists and the target is reachable")]
    ScanFailed { details: String },

    #[error("Failed to parse scan results: {details}")]
    ScannerOutputInvalid { details: String },

    #[error("Failed to write scan store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the data directory is writable")]
    StoreWriteError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl ScanboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        ScanboardError::Validation {
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScanboardError::ScanNotFound { .. }
            | ScanboardError::ScansNotFound { .. }
            | ScanboardError::SchedulerNotFound { .. } => ExitCode::NotFound,
            ScanboardError::InvalidExportFormat { .. } | ScanboardError::Validation { .. } => {
                ExitCode::InvalidArguments
            }
            ScanboardError::ScanFailed { .. }
            | ScanboardError::ScannerOutputInvalid { .. }
            | ScanboardError::StoreWriteError { .. }
            | ScanboardError::FileWriteError { .. } => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::NotFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::NotFound), "Not Found (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_scanboard_error() {
        let err: anyhow::Error = ScanboardError::ScanNotFound {
            id: "s1".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&err), ExitCode::NotFound);

        let err: anyhow::Error = ScanboardError::InvalidExportFormat {
            format: "xml".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&err), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_exit_code_for_wrapped_error() {
        let result: std::result::Result<(), ScanboardError> =
            Err(ScanboardError::validation("URL is required"));
        let err = result.context("while recording scan").unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_exit_code_for_foreign_error() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_scan_not_found_display() {
        let error = ScanboardError::ScanNotFound {
            id: "abc".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Scan not found: abc"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_scans_not_found_lists_ids() {
        let error = ScanboardError::ScansNotFound {
            ids: vec!["a".to_string(), "b".to_string()],
        };
        assert!(format!("{}", error).contains("a, b"));
    }

    #[test]
    fn test_invalid_export_format_display() {
        let error = ScanboardError::InvalidExportFormat {
            format: "xml".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("xml"));
        assert!(display.contains("json, csv, or txt"));
    }

    #[test]
    fn test_store_write_error_display() {
        let error = ScanboardError::StoreWriteError {
            path: PathBuf::from("/data/scans.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/data/scans.json"));
        assert!(display.contains("Permission denied"));
    }
}
