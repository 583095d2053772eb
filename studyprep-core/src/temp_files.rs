//! Temporary file management utilities.
//!
//! Staging files are created next to their final destination so that
//! persisting them is a same-filesystem rename. They are removed on drop if
//! never persisted, which keeps failed copies from leaving debris behind.

use crate::error::CoreResult;
use std::path::Path;
use tempfile::{Builder as TempFileBuilder, NamedTempFile};

/// Creates a hidden staging file with prefix and extension in `dir`.
/// Auto-deleted when dropped.
pub fn create_staging_file(dir: &Path, prefix: &str, extension: &str) -> CoreResult<NamedTempFile> {
    std::fs::create_dir_all(dir)?;
    let temp_file = TempFileBuilder::new()
        .prefix(&format!(".{prefix}_"))
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)?;

    Ok(temp_file)
}
