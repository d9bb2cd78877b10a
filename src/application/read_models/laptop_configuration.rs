//! Product page read model
//!
//! Turns a loaded aggregate into what the configurator shows: every option
//! list in display order, the initially selected configuration and the
//! hero image.

use crate::catalog::domain::{
    GraphicCard, LaptopAggregate, Processor, Ram, Screen, Storage, VariantSet,
};
use crate::catalog::policies::OptionOrder;
use serde::Serialize;

/// Options of one component kind as shown to the shopper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionList<T> {
    /// `false` when the options could not be loaded at all
    pub available: bool,
    pub options: Vec<T>,
}

impl<T: Clone> OptionList<T> {
    fn from_variants(variants: VariantSet<T>) -> Self {
        let available = !variants.is_unavailable();
        Self {
            available,
            options: variants.into_option().unwrap_or_default(),
        }
    }

    /// The option selected when the page opens
    pub fn default_option(&self) -> Option<T> {
        self.options.first().cloned()
    }
}

/// Configuration preselected on the product page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSelection {
    pub graphic_card: Option<GraphicCard>,
    pub processor: Option<Processor>,
    pub ram: Option<Ram>,
    pub screen: Option<Screen>,
    pub storage: Option<Storage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaptopConfiguration {
    pub brand: String,
    pub model: String,
    pub description: String,
    pub price: f64,
    pub graphic_cards: OptionList<GraphicCard>,
    pub processors: OptionList<Processor>,
    pub rams: OptionList<Ram>,
    pub screens: OptionList<Screen>,
    pub storages: OptionList<Storage>,
    pub images: Vec<String>,
    pub primary_image: Option<String>,
    pub selection: DefaultSelection,
}

impl LaptopConfiguration {
    pub fn from_aggregate(aggregate: LaptopAggregate) -> Self {
        let LaptopAggregate {
            brand,
            model,
            description,
            price,
            graphic_cards,
            processors,
            mut rams,
            mut screens,
            mut storages,
            images,
        } = aggregate;

        OptionOrder::screens(&mut screens);
        OptionOrder::rams(&mut rams);
        OptionOrder::storages(&mut storages);

        let graphic_cards = OptionList::from_variants(graphic_cards);
        let processors = OptionList::from_variants(processors);
        let rams = OptionList::from_variants(rams);
        let screens = OptionList::from_variants(screens);
        let storages = OptionList::from_variants(storages);

        let selection = DefaultSelection {
            graphic_card: graphic_cards.default_option(),
            processor: processors.default_option(),
            ram: rams.default_option(),
            screen: screens.default_option(),
            storage: storages.default_option(),
        };

        let images = images.unwrap_or_default();
        let primary_image = images.first().cloned();

        Self {
            brand,
            model,
            description,
            price,
            graphic_cards,
            processors,
            rams,
            screens,
            storages,
            images,
            primary_image,
            selection,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{CapacityUnit, LaptopRecord, StorageType};

    fn aggregate() -> LaptopAggregate {
        let mut aggregate = LaptopAggregate::from_root(LaptopRecord {
            brand: "Lenovo".to_string(),
            model: "Legion 5".to_string(),
            description: "Gaming laptop with a fast panel".to_string(),
            price: 1499.0,
        });
        aggregate.graphic_cards = VariantSet::Values(vec![
            GraphicCard {
                brand: "NVIDIA".to_string(),
                model: "RTX 4070".to_string(),
            },
            GraphicCard {
                brand: "NVIDIA".to_string(),
                model: "RTX 4060".to_string(),
            },
        ]);
        aggregate.processors = VariantSet::Empty;
        aggregate.rams = VariantSet::Values(vec![Ram { capacity: 32 }, Ram { capacity: 16 }]);
        aggregate.screens = VariantSet::Values(vec![Screen { size: 17.3 }, Screen { size: 15.6 }]);
        aggregate.storages = VariantSet::Values(vec![
            Storage {
                capacity: 1,
                capacity_unit: CapacityUnit::Tb,
                storage_type: StorageType::Ssd,
            },
            Storage {
                capacity: 512,
                capacity_unit: CapacityUnit::Gb,
                storage_type: StorageType::Ssd,
            },
        ]);
        aggregate.images = Some(vec![
            "https://cdn/a.png".to_string(),
            "https://cdn/b.png".to_string(),
        ]);
        aggregate
    }

    #[test]
    fn test_sorts_sized_options_ascending() {
        let configuration = LaptopConfiguration::from_aggregate(aggregate());

        assert_eq!(configuration.rams.options[0].capacity, 16);
        assert_eq!(configuration.screens.options[0].size, 15.6);
        assert_eq!(configuration.storages.options[0].capacity, 512);
        assert_eq!(
            configuration.storages.options[1].capacity_unit,
            CapacityUnit::Tb
        );
    }

    #[test]
    fn test_graphic_cards_keep_link_order() {
        let configuration = LaptopConfiguration::from_aggregate(aggregate());
        assert_eq!(configuration.graphic_cards.options[0].model, "RTX 4070");
    }

    #[test]
    fn test_default_selection_is_first_of_each_list() {
        let configuration = LaptopConfiguration::from_aggregate(aggregate());

        assert_eq!(configuration.selection.ram, Some(Ram { capacity: 16 }));
        assert_eq!(configuration.selection.screen, Some(Screen { size: 15.6 }));
        assert_eq!(configuration.selection.processor, None);
        assert_eq!(
            configuration.primary_image.as_deref(),
            Some("https://cdn/a.png")
        );
    }

    #[test]
    fn test_unavailable_stays_distinguishable_from_empty() {
        let configuration = LaptopConfiguration::from_aggregate(aggregate());

        assert!(configuration.processors.available);
        assert!(configuration.processors.options.is_empty());

        let mut missing = aggregate();
        missing.processors = VariantSet::Unavailable;
        missing.images = None;
        let configuration = LaptopConfiguration::from_aggregate(missing);
        assert!(!configuration.processors.available);
        assert!(configuration.images.is_empty());
        assert!(configuration.primary_image.is_none());
    }
}
