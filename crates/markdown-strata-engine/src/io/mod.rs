use std::fs;
use std::path::{Path, PathBuf};

use crate::models::document::Document;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file into a [`Document`].
pub fn load_file(path: &Path) -> Result<Document, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(LoadError::Io)?;
    Ok(Document::from_text(&text))
}
