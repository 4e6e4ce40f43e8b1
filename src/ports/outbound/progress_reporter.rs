/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr) so a user
/// watching a scan run gets feedback while the scanner works.
pub trait ProgressReporter {
    /// Reports a one-off progress message
    fn report(&self, message: &str);

    /// Starts an open-ended activity (a spinner, for a console reporter)
    ///
    /// # Arguments
    /// * `message` - What is being waited for
    fn start_activity(&self, message: &str);

    /// Ends the activity started with `start_activity`
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn finish_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);
}
