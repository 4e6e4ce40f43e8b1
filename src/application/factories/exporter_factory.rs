use crate::adapters::outbound::formatters::{CsvExporter, JsonExporter, TextExporter};
use crate::application::dto::ExportFormat;
use crate::ports::outbound::ScanExporter;

/// Factory for creating scan exporters
///
/// Selects the exporter adapter for a requested export format, so use cases
/// only depend on the `ScanExporter` port.
pub struct ExporterFactory;

impl ExporterFactory {
    /// Creates an exporter instance for the specified format
    ///
    /// # Examples
    /// ```
    /// use scanboard::application::dto::ExportFormat;
    /// use scanboard::application::factories::ExporterFactory;
    ///
    /// let exporter = ExporterFactory::create(ExportFormat::Csv);
    /// ```
    pub fn create(format: ExportFormat) -> Box<dyn ScanExporter> {
        match format {
            ExportFormat::Json => Box::new(JsonExporter::new()),
            ExportFormat::Csv => Box::new(CsvExporter::new()),
            ExportFormat::Text => Box::new(TextExporter::new()),
        }
    }
}
