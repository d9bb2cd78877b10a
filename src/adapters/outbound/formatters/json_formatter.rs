use crate::application::read_models::{CatalogCard, LaptopConfiguration};
use crate::catalog::domain::LaptopAggregate;
use crate::ports::outbound::LaptopFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// JsonFormatter adapter for machine-readable output
///
/// Field names are camelCase. Component lists that could not be loaded are
/// `null`, lists that loaded but hold nothing are `[]`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON output")
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LaptopFormatter for JsonFormatter {
    fn format_aggregate(&self, aggregate: &LaptopAggregate) -> Result<String> {
        Self::pretty(aggregate)
    }

    fn format_configuration(&self, configuration: &LaptopConfiguration) -> Result<String> {
        Self::pretty(configuration)
    }

    fn format_top_picks(&self, cards: &[CatalogCard]) -> Result<String> {
        Self::pretty(cards)
    }
}
