use crate::catalog::domain::{ImageUpload, LaptopDraft};
use crate::ports::outbound::DraftReader;
use crate::shared::error::StoreError;
use crate::shared::security::{
    validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE, MAX_IMAGE_SIZE,
};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for admin drafts
///
/// Reads a YAML draft and the image files it lists. Image paths are
/// resolved against the draft's directory.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read(&self, path: &Path, description: &str, max_size: u64) -> Result<Vec<u8>> {
        let read_error = |details: String| -> anyhow::Error {
            StoreError::FileReadError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        };

        validate_regular_file(path, description).map_err(|e| read_error(e.to_string()))?;

        let metadata = fs::metadata(path).map_err(|e| read_error(e.to_string()))?;
        validate_file_size(metadata.len(), path, max_size)?;

        fs::read(path).map_err(|e| read_error(e.to_string()))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftReader for FileSystemReader {
    fn read_draft(&self, path: &Path) -> Result<LaptopDraft> {
        let bytes = self.safe_read(path, "laptop draft", MAX_DOCUMENT_SIZE)?;

        serde_yaml_ng::from_slice(&bytes).map_err(|e| {
            StoreError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Invalid laptop draft: {}", e),
            }
            .into()
        })
    }

    fn read_images(&self, draft_path: &Path, draft: &LaptopDraft) -> Result<Vec<ImageUpload>> {
        let base = draft_path.parent().unwrap_or_else(|| Path::new(""));

        draft
            .images
            .iter()
            .map(|image| {
                let path: PathBuf = base.join(image);
                let bytes = self.safe_read(&path, "image", MAX_IMAGE_SIZE)?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ImageUpload::new(file_name, bytes)
            })
            .collect()
    }
}
