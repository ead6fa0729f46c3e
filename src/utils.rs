// ABOUTME: Utility functions for the touying-export application
// ABOUTME: Path resolution and validation helpers used before delegation

use crate::errors::{ExportError, Result};
use std::path::{Path, PathBuf};

/// Extension the exporter gives its output when no path is supplied
pub const HTML_EXTENSION: &str = "html";

/// Resolve `path` against `cwd` unless it is already absolute
pub fn resolve_against(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Output path the exporter picks for `input` when none is given.
/// Replaces the extension, or appends one if `input` has none.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(HTML_EXTENSION)
}

/// Validate that the input document exists
pub fn validate_input_exists(path: &Path, cwd: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExportError::NotFoundError {
            path: path.to_path_buf(),
            cwd: cwd.to_path_buf(),
        });
    }
    Ok(())
}
