use crate::shared::error::StoreError;
use crate::shared::security::validate_path_component;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum length for laptop identifiers (security limit)
const MAX_LAPTOP_ID_LENGTH: usize = 128;

/// NewType wrapper for a laptop identifier
///
/// The backend's identifier scheme is opaque to the catalog (UUIDs in
/// production, short keys in fixtures). The only requirement is that the
/// value can be embedded in a REST filter and used as a storage folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LaptopId(String);

impl LaptopId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.len() > MAX_LAPTOP_ID_LENGTH {
            return Err(StoreError::InvalidLaptopId {
                reason: format!(
                    "too long ({} bytes, maximum {})",
                    id.len(),
                    MAX_LAPTOP_ID_LENGTH
                ),
                id,
            }
            .into());
        }

        if let Err(e) = validate_path_component(&id, "Laptop id") {
            return Err(StoreError::InvalidLaptopId {
                id,
                reason: e.to_string(),
            }
            .into());
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object-store folder holding this laptop's images
    pub fn image_folder(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LaptopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category offered by the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Office,
    Gaming,
    Creative,
    Student,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Office,
        Category::Gaming,
        Category::Creative,
        Category::Student,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Office => "Office",
            Category::Gaming => "Gaming",
            Category::Creative => "Creative",
            Category::Student => "Student",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                format!(
                    "Invalid category: {}. Expected one of Office, Gaming, Creative, Student",
                    s
                )
            })
    }
}

/// Root laptop record as the loader reads it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaptopRecord {
    pub brand: String,
    pub model: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

impl LaptopRecord {
    pub const TABLE: &'static str = "laptop";
    pub const COLUMNS: [&'static str; 4] = ["brand", "model", "description", "price"];
}

/// Catalog listing row (`id, brand, model, price`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaptopSummary {
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

impl LaptopSummary {
    pub const COLUMNS: [&'static str; 4] = ["id", "brand", "model", "price"];
}

/// Accepts prices as JSON numbers or as numeric strings.
///
/// Postgres `numeric` columns come back as strings from some backends.
pub fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid price {:?}: {}", s, e))),
    }
}
