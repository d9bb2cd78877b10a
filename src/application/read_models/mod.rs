//! Read models for the storefront pages
//!
//! View-optimized structs derived from the loaded aggregate and the
//! catalog listing. They are what the formatters render.

pub mod catalog_card;
pub mod laptop_configuration;

pub use catalog_card::CatalogCard;
pub use laptop_configuration::{DefaultSelection, LaptopConfiguration, OptionList};
