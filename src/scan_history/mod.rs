/// Scan history domain
///
/// Pure business logic over stored scan results: the record model,
/// severity classification, aggregation, comparison and filtering.
/// Nothing in this module touches the file system or spawns processes.
pub mod domain;
pub mod services;
