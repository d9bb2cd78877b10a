/// ProgressReporter port for reporting progress and diagnostics
///
/// This port abstracts where progress and failure messages go (stderr in
/// the CLI, a recorder in tests). Implementations must be `Send + Sync`
/// because the loader reports from concurrently running fetches.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a percentage
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
