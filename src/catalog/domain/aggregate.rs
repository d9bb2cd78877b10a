use super::component::{GraphicCard, Processor, Ram, Screen, Storage};
use super::laptop::LaptopRecord;
use super::variant_set::VariantSet;
use serde::{Deserialize, Serialize};

/// Denormalized view of one laptop and every option it can be configured with.
///
/// Assembled by the loader from the root record, the five junction tables
/// and the image folder. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaptopAggregate {
    pub brand: String,
    pub model: String,
    pub description: String,
    pub price: f64,
    pub graphic_cards: VariantSet<GraphicCard>,
    pub processors: VariantSet<Processor>,
    pub rams: VariantSet<Ram>,
    pub screens: VariantSet<Screen>,
    pub storages: VariantSet<Storage>,
    /// `None` when the folder listing failed or the folder holds no files
    pub images: Option<Vec<String>>,
}

impl LaptopAggregate {
    /// Starts an aggregate from the root record with every other field unavailable
    pub fn from_root(root: LaptopRecord) -> Self {
        Self {
            brand: root.brand,
            model: root.model,
            description: root.description,
            price: root.price,
            graphic_cards: VariantSet::Unavailable,
            processors: VariantSet::Unavailable,
            rams: VariantSet::Unavailable,
            screens: VariantSet::Unavailable,
            storages: VariantSet::Unavailable,
            images: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
