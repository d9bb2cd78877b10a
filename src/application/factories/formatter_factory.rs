use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::LaptopFormatter;

/// Factory for creating catalog formatters
///
/// Selects the formatter adapter matching the output format requested on
/// the command line.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use intech_storefront::application::dto::OutputFormat;
    /// use intech_storefront::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn LaptopFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress message shown before rendering
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON output...",
            OutputFormat::Markdown => "📝 Rendering Markdown product sheet...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::CatalogCard;

    fn cards() -> Vec<CatalogCard> {
        vec![CatalogCard {
            id: "L1".to_string(),
            brand: "HP".to_string(),
            model: "Spectre x360".to_string(),
            price: 1299.0,
            thumbnail: None,
        }]
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json);
        let output = formatter.format_top_picks(&cards()).unwrap();
        assert!(output.trim_start().starts_with('['));
    }

    #[test]
    fn test_create_markdown_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Markdown);
        let output = formatter.format_top_picks(&cards()).unwrap();
        assert!(output.starts_with('#'));
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Rendering JSON output..."
        );
        assert!(FormatterFactory::progress_message(OutputFormat::Markdown).contains("Markdown"));
    }
}
