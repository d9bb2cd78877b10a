use crate::catalog::domain::{ImageUpload, LaptopDraft};
use crate::shared::Result;
use std::path::Path;

/// DraftReader port for reading admin laptop drafts
///
/// This port abstracts where a draft and its images come from so the
/// creation use case can be exercised without touching the file system.
pub trait DraftReader {
    /// Reads and parses a draft document
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid draft
    fn read_draft(&self, path: &Path) -> Result<LaptopDraft>;

    /// Loads every image the draft references, resolved against `draft_path`'s directory
    ///
    /// # Errors
    /// Returns an error if an image is missing, too large or not an accepted type
    fn read_images(&self, draft_path: &Path, draft: &LaptopDraft) -> Result<Vec<ImageUpload>>;
}
