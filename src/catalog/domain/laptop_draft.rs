use super::component::{Component, GraphicCard, Processor, Ram, Screen, Storage};
use super::laptop::Category;
use crate::shared::error::StoreError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Minimum description length accepted by the admin form
pub const MIN_DESCRIPTION_LENGTH: usize = 15;

const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// A laptop as submitted through the admin entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopDraft {
    pub stock: i64,
    pub brand: String,
    pub model: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub graphic_cards: Vec<GraphicCard>,
    #[serde(default)]
    pub processors: Vec<Processor>,
    #[serde(default)]
    pub rams: Vec<Ram>,
    #[serde(default)]
    pub screens: Vec<Screen>,
    #[serde(default)]
    pub storages: Vec<Storage>,
    /// Image files, relative to the draft file
    #[serde(default)]
    pub images: Vec<PathBuf>,
}

impl LaptopDraft {
    /// Collects every rule the draft breaks, in form order
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.stock < 0 {
            violations.push("Stock must be zero or more".to_string());
        }
        if self.brand.trim().is_empty() {
            violations.push("Brand is required".to_string());
        }
        if self.model.trim().is_empty() {
            violations.push("Model is required".to_string());
        }
        if let Err(e) = self.category.parse::<Category>() {
            violations.push(e);
        }
        if self.description.trim().chars().count() < MIN_DESCRIPTION_LENGTH {
            violations.push(format!(
                "Description must have at least {} characters",
                MIN_DESCRIPTION_LENGTH
            ));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            violations.push("Price must be positive".to_string());
        }

        require_options(&mut violations, &self.graphic_cards, "graphic card");
        require_options(&mut violations, &self.processors, "processor");
        require_options(&mut violations, &self.rams, "RAM value");
        require_options(&mut violations, &self.screens, "screen");
        require_options(&mut violations, &self.storages, "storage option");

        for image in &self.images {
            if image_content_type(&image.to_string_lossy()).is_none() {
                violations.push(format!(
                    "Only image files jpeg, png, and jpg are allowed: {}",
                    image.display()
                ));
            }
        }

        violations
    }

    /// Validates the draft and returns its category
    ///
    /// # Errors
    /// Returns `StoreError::Validation` listing every violation
    pub fn validate(&self) -> Result<Category> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(StoreError::Validation {
                message: violations.join("; "),
            }
            .into());
        }

        self.category
            .parse::<Category>()
            .map_err(|message| StoreError::Validation { message }.into())
    }

    /// Row written to the root table
    pub fn root_row(&self, category: Category) -> Value {
        json!({
            "stock": self.stock,
            "brand": self.brand.trim(),
            "model": self.model.trim(),
            "category": category.as_str(),
            "description": self.description.trim(),
            "price": self.price,
        })
    }
}

fn require_options<C: Component>(violations: &mut Vec<String>, options: &[C], option: &str) {
    if options.is_empty() {
        violations.push(format!("At least one {} is required", option));
    }
    for option in options {
        violations.extend(option.violations());
    }
}

/// An image ready to be uploaded to a laptop's folder
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// # Errors
    /// Returns an error if the file is not a jpeg, jpg or png image
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        let content_type = image_content_type(&file_name).ok_or_else(|| StoreError::Validation {
            message: format!(
                "Only image files jpeg, png, and jpg are allowed: {}",
                file_name
            ),
        })?;

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn extension(&self) -> &'static str {
        match self.content_type {
            "image/png" => "png",
            _ => "jpg",
        }
    }
}

/// MIME type for an image file name, `None` if the type is not accepted
pub fn image_content_type(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let content_type = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => return None,
    };
    ALLOWED_IMAGE_TYPES
        .contains(&content_type)
        .then_some(content_type)
}
