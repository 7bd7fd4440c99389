//! Reading puzzle input from disk

use crate::error::InputError;
use std::path::Path;
use tracing::debug;

/// Read a puzzle input file, dropping trailing whitespace.
pub fn load_input(path: &Path) -> Result<String, InputError> {
    let mut text = std::fs::read_to_string(path).map_err(|source| InputError {
        path: path.to_path_buf(),
        source,
    })?;
    text.truncate(text.trim_end().len());
    debug!(path = %path.display(), bytes = text.len(), "loaded puzzle input");
    Ok(text)
}
