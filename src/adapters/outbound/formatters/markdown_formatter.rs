use crate::application::read_models::{CatalogCard, LaptopConfiguration, OptionList};
use crate::catalog::domain::{
    CapacityUnit, GraphicCard, LaptopAggregate, Processor, Ram, Screen, Storage, StorageType,
    VariantSet,
};
use crate::ports::outbound::LaptopFormatter;
use crate::shared::Result;

/// Markdown table header for the catalog listing
const CATALOG_TABLE_HEADER: &str = "| Laptop | Price | Thumbnail |\n";

/// Markdown table separator line for the catalog listing
const CATALOG_TABLE_SEPARATOR: &str = "|--------|-------|-----------|\n";

const UNAVAILABLE: &str = "_Could not be loaded_";
const NO_OPTIONS: &str = "_No options_";

/// MarkdownFormatter adapter for human-readable product sheets
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn price(value: f64) -> String {
        format!("${:.2}", value)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Labels for option lists
impl MarkdownFormatter {
    fn graphic_card(card: &GraphicCard) -> String {
        format!("{} {}", card.brand, card.model)
    }

    fn processor(processor: &Processor) -> String {
        format!("{} {}", processor.brand, processor.model)
    }

    fn ram(ram: &Ram) -> String {
        format!("{} GB", ram.capacity)
    }

    fn screen(screen: &Screen) -> String {
        format!("{}\"", screen.size)
    }

    fn storage(storage: &Storage) -> String {
        let unit = match storage.capacity_unit {
            CapacityUnit::Gb => "GB",
            CapacityUnit::Tb => "TB",
        };
        let kind = match storage.storage_type {
            StorageType::Ssd => "SSD",
            StorageType::Hdd => "HDD",
        };
        format!("{} {} {}", storage.capacity, unit, kind)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(output: &mut String, brand: &str, model: &str, price: f64, description: &str) {
        output.push_str(&format!("# {} {}\n\n", brand, model));
        output.push_str(&format!("**Price:** {}\n\n", Self::price(price)));
        output.push_str(description.trim());
        output.push_str("\n\n");
    }

    /// Renders one option section; `None` means the options could not be loaded
    fn render_options<T>(
        output: &mut String,
        title: &str,
        options: Option<&[T]>,
        selected: Option<&T>,
        label: fn(&T) -> String,
    ) where
        T: PartialEq,
    {
        output.push_str(&format!("## {}\n\n", title));
        match options {
            None => output.push_str(UNAVAILABLE),
            Some([]) => output.push_str(NO_OPTIONS),
            Some(options) => {
                let lines: Vec<String> = options
                    .iter()
                    .map(|option| {
                        if selected == Some(option) {
                            format!("- **{}** (default)", label(option))
                        } else {
                            format!("- {}", label(option))
                        }
                    })
                    .collect();
                output.push_str(&lines.join("\n"));
            }
        }
        output.push_str("\n\n");
    }

    fn list<T>(list: &OptionList<T>) -> Option<&[T]> {
        list.available.then_some(list.options.as_slice())
    }

    fn variants<T>(set: &VariantSet<T>) -> Option<&[T]> {
        (!set.is_unavailable()).then(|| set.as_slice())
    }

    fn render_images(output: &mut String, images: Option<&[String]>) {
        output.push_str("## Images\n\n");
        match images {
            Some(images) if !images.is_empty() => {
                for (index, url) in images.iter().enumerate() {
                    output.push_str(&format!("![Image {}]({})\n", index + 1, url));
                }
            }
            _ => output.push_str("_No images_\n"),
        }
    }
}

impl LaptopFormatter for MarkdownFormatter {
    fn format_aggregate(&self, aggregate: &LaptopAggregate) -> Result<String> {
        let mut output = String::new();
        Self::render_header(
            &mut output,
            &aggregate.brand,
            &aggregate.model,
            aggregate.price,
            &aggregate.description,
        );

        Self::render_options(
            &mut output,
            "Graphic cards",
            Self::variants(&aggregate.graphic_cards),
            None,
            Self::graphic_card,
        );
        Self::render_options(
            &mut output,
            "Processors",
            Self::variants(&aggregate.processors),
            None,
            Self::processor,
        );
        Self::render_options(
            &mut output,
            "RAM",
            Self::variants(&aggregate.rams),
            None,
            Self::ram,
        );
        Self::render_options(
            &mut output,
            "Screens",
            Self::variants(&aggregate.screens),
            None,
            Self::screen,
        );
        Self::render_options(
            &mut output,
            "Storage",
            Self::variants(&aggregate.storages),
            None,
            Self::storage,
        );
        Self::render_images(&mut output, aggregate.images.as_deref());

        Ok(output)
    }

    fn format_configuration(&self, configuration: &LaptopConfiguration) -> Result<String> {
        let mut output = String::new();
        Self::render_header(
            &mut output,
            &configuration.brand,
            &configuration.model,
            configuration.price,
            &configuration.description,
        );

        if let Some(image) = &configuration.primary_image {
            output.push_str(&format!("![{}]({})\n\n", configuration.display_name(), image));
        }

        let selection = &configuration.selection;
        Self::render_options(
            &mut output,
            "Graphic cards",
            Self::list(&configuration.graphic_cards),
            selection.graphic_card.as_ref(),
            Self::graphic_card,
        );
        Self::render_options(
            &mut output,
            "Processors",
            Self::list(&configuration.processors),
            selection.processor.as_ref(),
            Self::processor,
        );
        Self::render_options(
            &mut output,
            "RAM",
            Self::list(&configuration.rams),
            selection.ram.as_ref(),
            Self::ram,
        );
        Self::render_options(
            &mut output,
            "Screens",
            Self::list(&configuration.screens),
            selection.screen.as_ref(),
            Self::screen,
        );
        Self::render_options(
            &mut output,
            "Storage",
            Self::list(&configuration.storages),
            selection.storage.as_ref(),
            Self::storage,
        );
        Self::render_images(&mut output, Some(&configuration.images));

        Ok(output)
    }

    fn format_top_picks(&self, cards: &[CatalogCard]) -> Result<String> {
        let mut output = String::from("# Top picks\n\n");

        if cards.is_empty() {
            output.push_str("_No laptops in the catalog_\n");
            return Ok(output);
        }

        output.push_str(CATALOG_TABLE_HEADER);
        output.push_str(CATALOG_TABLE_SEPARATOR);
        for card in cards {
            let thumbnail = card
                .thumbnail
                .as_ref()
                .map(|url| format!("![thumbnail]({})", url))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&card.display_name()),
                Self::price(card.price),
                thumbnail
            ));
        }

        Ok(output)
    }
}
