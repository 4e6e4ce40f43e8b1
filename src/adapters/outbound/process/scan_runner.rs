use crate::application::dto::{ScanKind, ScanRequest};
use crate::ports::outbound::ScanRunner;
use crate::scan_history::domain::ScanRecord;
use crate::shared::error::ScanboardError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Longest stdout excerpt quoted in an invalid-output error
const OUTPUT_EXCERPT_LEN: usize = 200;

/// Scanner script for each scan tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerScripts {
    pub basic: PathBuf,
    pub advanced: PathBuf,
    pub ultimate: PathBuf,
}

impl ScannerScripts {
    fn for_kind(&self, kind: ScanKind) -> &PathBuf {
        match kind {
            ScanKind::Basic => &self.basic,
            ScanKind::Advanced => &self.advanced,
            ScanKind::Ultimate => &self.ultimate,
        }
    }
}

/// ProcessScanRunner adapter running a scanner script as a child process
///
/// The child is invoked as `<program> <script> <url>`; advanced and ultimate
/// scanners additionally receive the request config as a JSON argument. The
/// scanner writes one scan record as JSON on stdout and logs on stderr.
pub struct ProcessScanRunner {
    program: String,
    scripts: ScannerScripts,
    timeout: Option<Duration>,
}

impl ProcessScanRunner {
    pub fn new(
        program: impl Into<String>,
        scripts: ScannerScripts,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            program: program.into(),
            scripts,
            timeout,
        }
    }

    fn command(&self, request: &ScanRequest) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(self.scripts.for_kind(request.kind))
            .arg(&request.url);
        if request.kind.takes_config() {
            command.arg(request.config.to_string());
        }
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    fn parse_output(stdout: &[u8]) -> Result<ScanRecord> {
        let text = String::from_utf8_lossy(stdout);
        serde_json::from_str::<ScanRecord>(text.trim()).map_err(|e| {
            let excerpt: String = text.chars().take(OUTPUT_EXCERPT_LEN).collect();
            ScanboardError::ScannerOutputInvalid {
                details: format!("{} (output: {:?})", e, excerpt),
            }
            .into()
        })
    }
}

#[async_trait]
impl ScanRunner for ProcessScanRunner {
    async fn run(&self, request: &ScanRequest) -> Result<ScanRecord> {
        let script = self.scripts.for_kind(request.kind);
        log::debug!(
            "Spawning {} {} {}",
            self.program,
            script.display(),
            request.url
        );

        let child = self.command(request).spawn().map_err(|e| ScanboardError::ScanFailed {
            details: format!("Failed to start {}: {}", self.program, e),
        })?;

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| ScanboardError::ScanFailed {
                    details: format!("Scanner timed out after {} seconds", limit.as_secs()),
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| ScanboardError::ScanFailed {
            details: e.to_string(),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            log::debug!("Scanner log: {}", line);
        }

        if !output.status.success() {
            return Err(ScanboardError::ScanFailed {
                details: if stderr.trim().is_empty() {
                    format!("scanner exited with {}", output.status)
                } else {
                    stderr.trim().to_string()
                },
            }
            .into());
        }

        Self::parse_output(&output.stdout)
    }
}
