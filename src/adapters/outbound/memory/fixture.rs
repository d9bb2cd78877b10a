use crate::ports::outbound::Row;
use crate::shared::error::StoreError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Seed data for an [`InMemoryBackend`](super::InMemoryBackend)
///
/// ```json
/// {
///   "tables": { "laptop": [{ "id": "L1", "brand": "Dell", ... }] },
///   "files": { "L1": ["front.png", "back.png"] },
///   "users": [{ "email": "admin@intech.store", "password": "secret" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendFixture {
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<Row>>,
    /// Folder name to file names, in listing order
    #[serde(default)]
    pub files: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub users: Vec<FixtureUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureUser {
    /// Generated when omitted
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub password: String,
}

impl BackendFixture {
    /// Reads a JSON fixture file
    ///
    /// # Errors
    /// Returns `StoreError::FileReadError` if the file is missing, too large or not valid JSON
    pub fn load(path: &Path) -> Result<Self> {
        let read_error = |details: String| -> anyhow::Error {
            StoreError::FileReadError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        };

        validate_regular_file(path, "fixture").map_err(|e| read_error(e.to_string()))?;
        let metadata = fs::metadata(path).map_err(|e| read_error(e.to_string()))?;
        validate_file_size(metadata.len(), path, MAX_DOCUMENT_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| read_error(format!("Invalid fixture: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_fixture() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "tables": { "laptop": [{ "id": "L1", "brand": "Dell" }] },
                "files": { "L1": ["front.png"] },
                "users": [{ "email": "admin@intech.store", "password": "secret" }]
            }"#,
        )
        .unwrap();

        let fixture = BackendFixture::load(&path).unwrap();

        assert_eq!(fixture.tables["laptop"][0]["brand"], "Dell");
        assert_eq!(fixture.files["L1"], vec!["front.png".to_string()]);
        assert!(fixture.users[0].id.is_none());
    }

    #[test]
    fn test_load_fixture_rejects_unknown_sections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, r#"{ "buckets": {} }"#).unwrap();

        let err = BackendFixture::load(&path).unwrap_err();

        assert!(err.to_string().contains("Invalid fixture"));
    }

    #[test]
    fn test_load_fixture_missing_file() {
        let err = BackendFixture::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
