use crate::application::read_models::{CatalogCard, LaptopConfiguration};
use crate::catalog::domain::LaptopAggregate;
use crate::shared::Result;

/// LaptopFormatter port for rendering catalog data
///
/// This port abstracts the output representation (JSON for other
/// programs, Markdown for people).
pub trait LaptopFormatter {
    /// Formats a loaded aggregate as-is
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_aggregate(&self, aggregate: &LaptopAggregate) -> Result<String>;

    /// Formats the product page configuration (sorted options and defaults)
    fn format_configuration(&self, configuration: &LaptopConfiguration) -> Result<String>;

    /// Formats the catalog listing
    fn format_top_picks(&self, cards: &[CatalogCard]) -> Result<String>;
}
