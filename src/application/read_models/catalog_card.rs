use crate::catalog::domain::LaptopSummary;
use serde::Serialize;

/// One laptop on the catalog page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCard {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
    /// First image of the laptop's folder, if any could be listed
    pub thumbnail: Option<String>,
}

impl CatalogCard {
    pub fn new(summary: LaptopSummary, thumbnail: Option<String>) -> Self {
        Self {
            id: summary.id,
            brand: summary.brand,
            model: summary.model,
            price: summary.price,
            thumbnail,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
