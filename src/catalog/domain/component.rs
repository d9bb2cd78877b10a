use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Column on every junction table that points back at the laptop
pub const LAPTOP_LINK_COLUMN: &str = "laptop_id";

/// The five kinds of configurable component a laptop links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    GraphicCard,
    Processor,
    Ram,
    Screen,
    Storage,
}

impl ComponentKind {
    /// Table holding the shared component rows
    pub fn table(&self) -> &'static str {
        match self {
            ComponentKind::GraphicCard => "graphic_card",
            ComponentKind::Processor => "processor",
            ComponentKind::Ram => "ram",
            ComponentKind::Screen => "screen",
            ComponentKind::Storage => "storage",
        }
    }

    /// Junction table linking laptops to rows of [`Self::table`]
    pub fn junction_table(&self) -> &'static str {
        match self {
            ComponentKind::GraphicCard => "laptop_graphic_card",
            ComponentKind::Processor => "laptop_processor",
            ComponentKind::Ram => "laptop_ram",
            ComponentKind::Screen => "laptop_screen",
            ComponentKind::Storage => "laptop_storage",
        }
    }

    /// Junction column holding the component id
    pub fn link_column(&self) -> &'static str {
        match self {
            ComponentKind::GraphicCard => "graphic_card_id",
            ComponentKind::Processor => "processor_id",
            ComponentKind::Ram => "ram_id",
            ComponentKind::Screen => "screen_id",
            ComponentKind::Storage => "storage_id",
        }
    }

    /// Columns selected when reading a component row
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ComponentKind::GraphicCard | ComponentKind::Processor => &["brand", "model"],
            ComponentKind::Ram => &["capacity"],
            ComponentKind::Screen => &["size"],
            ComponentKind::Storage => &["capacity", "capacity_unit", "type"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::GraphicCard => "graphic card",
            ComponentKind::Processor => "processor",
            ComponentKind::Ram => "RAM",
            ComponentKind::Screen => "screen",
            ComponentKind::Storage => "storage",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A component variant row, statically bound to its kind
pub trait Component: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ComponentKind;

    /// Returns a message for every attribute that would be rejected on insert
    fn violations(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicCard {
    pub brand: String,
    pub model: String,
}

impl Component for GraphicCard {
    const KIND: ComponentKind = ComponentKind::GraphicCard;

    fn violations(&self) -> Vec<String> {
        brand_and_model_violations("Graphic card", &self.brand, &self.model)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Processor {
    pub brand: String,
    pub model: String,
}

impl Component for Processor {
    const KIND: ComponentKind = ComponentKind::Processor;

    fn violations(&self) -> Vec<String> {
        brand_and_model_violations("Processor", &self.brand, &self.model)
    }
}

/// RAM option, capacity in GB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ram {
    pub capacity: u32,
}

impl Component for Ram {
    const KIND: ComponentKind = ComponentKind::Ram;

    fn violations(&self) -> Vec<String> {
        if self.capacity == 0 {
            vec!["RAM capacity must be a positive integer".to_string()]
        } else {
            vec![]
        }
    }
}

/// Screen option, diagonal size in inches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub size: f64,
}

impl Component for Screen {
    const KIND: ComponentKind = ComponentKind::Screen;

    fn violations(&self) -> Vec<String> {
        if !self.size.is_finite() || self.size <= 0.0 {
            vec!["Screen size must be positive".to_string()]
        } else {
            vec![]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityUnit {
    #[serde(rename = "GB")]
    Gb,
    #[serde(rename = "TB")]
    Tb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageType {
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "HDD")]
    Hdd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub capacity: u32,
    pub capacity_unit: CapacityUnit,
    #[serde(rename = "type")]
    pub storage_type: StorageType,
}

impl Storage {
    /// Capacity normalized to GB (1 TB = 1024 GB)
    pub fn capacity_in_gb(&self) -> u64 {
        match self.capacity_unit {
            CapacityUnit::Gb => u64::from(self.capacity),
            CapacityUnit::Tb => u64::from(self.capacity) * 1024,
        }
    }
}

impl Component for Storage {
    const KIND: ComponentKind = ComponentKind::Storage;

    fn violations(&self) -> Vec<String> {
        if self.capacity == 0 {
            vec!["Storage capacity must be a positive integer".to_string()]
        } else {
            vec![]
        }
    }
}

fn brand_and_model_violations(subject: &str, brand: &str, model: &str) -> Vec<String> {
    let mut violations = Vec::new();
    if brand.trim().is_empty() {
        violations.push(format!("{} brand is required", subject));
    }
    if model.trim().is_empty() {
        violations.push(format!("{} model is required", subject));
    }
    violations
}
