/// ExportArtifact - a rendered export ready to be written or served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name, e.g. `scan-<id>.csv`
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}
