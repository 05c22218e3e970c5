//! Read-only document loaded once per run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::lib::errors::DocumentError;

/// Raw text of the document under validation plus its line count.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
    line_count: usize,
}

impl Document {
    /// Build a document from text already in memory.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_count = text.lines().count();
        Self {
            path: path.into(),
            text,
            line_count,
        }
    }

    /// Read the document from disk. Invalid UTF-8 is decoded lossily.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        if path.is_dir() {
            return Err(DocumentError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let bytes =
            fs::read(path).map_err(|err| DocumentError::from_io(path.to_path_buf(), err))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let document = Self::from_text(path, text);
        debug!(
            target: "docgate::scan",
            path = %path.display(),
            bytes = bytes.len(),
            lines = document.line_count,
            "Loaded document"
        );
        Ok(document)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }
}
