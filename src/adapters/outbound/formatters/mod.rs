/// Exporter adapters for the supported export formats
mod csv_exporter;
mod json_exporter;
mod text_exporter;

pub use csv_exporter::CsvExporter;
pub use json_exporter::JsonExporter;
pub use text_exporter::TextExporter;
