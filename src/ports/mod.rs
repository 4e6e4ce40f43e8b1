/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to storage, the external scanner and
/// the output destination through the outbound ports defined here.
pub mod outbound;
