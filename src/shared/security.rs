use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a draft or fixture file (10 MB)
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum size of a single uploaded image (20 MB)
pub const MAX_IMAGE_SIZE: u64 = 20 * 1024 * 1024;

/// Validates a value that is interpolated into a backend URL or object path.
///
/// Identifiers and file names end up inside REST query strings and storage
/// paths, so separators and query metacharacters are rejected outright.
///
/// # Arguments
/// * `component` - The raw value
/// * `component_type` - Human readable name used in the error message
///
/// # Errors
/// Returns an error if the value is empty or contains `/`, `\`, `..`, `#`, `?` or `&`
pub fn validate_path_component(component: &str, component_type: &str) -> Result<()> {
    if component.trim().is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('&') {
        anyhow::bail!(
            "Security: {} contains URL-unsafe characters",
            component_type
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
