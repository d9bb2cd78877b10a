use serde::Serialize;

/// Result of a successful admin laptop creation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedLaptop {
    /// Identifier generated by the backend for the root row
    pub laptop_id: String,
    /// Public URLs of the uploaded images, in upload order
    pub image_urls: Vec<String>,
}
