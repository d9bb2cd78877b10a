use crate::catalog::domain::{LaptopAggregate, LaptopId};
use async_trait::async_trait;

/// LaptopLoadingPort - Inbound port for the product detail page
///
/// This port defines what a product page (or any other driving adapter)
/// needs from the application: one call that returns everything the page
/// renders, or nothing if the laptop does not exist.
#[async_trait]
pub trait LaptopLoadingPort: Send + Sync {
    /// Loads the full aggregate for a laptop
    ///
    /// # Returns
    /// `None` only when the root record is missing or unreachable. Failures
    /// of component links, component rows or the image listing degrade the
    /// affected field instead.
    async fn load(&self, laptop_id: &LaptopId) -> Option<LaptopAggregate>;
}
