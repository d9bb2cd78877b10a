use crate::shared::Result;

/// Destination for rendered product pages and catalog listings
///
/// The CLI picks stdout or a file through the presenter factory.
pub trait OutputPresenter {
    /// Writes the rendered document
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, or if the
    /// target path is refused by the security checks
    fn present(&self, content: &str) -> Result<()>;
}
