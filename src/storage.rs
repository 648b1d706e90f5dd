use crate::error::ExportError;
use crate::wunderlist::{Export, load_export};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a Wunderlist export file from disk
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Export, ExportError> {
        let content = fs::read_to_string(&self.file_path).map_err(|source| ExportError::Read {
            path: self.file_path.clone(),
            source,
        })?;
        let export = parse_export(&content)?;

        info!(
            path = %self.file_path.display(),
            lists = export.lists.len(),
            tasks = export.task_count(),
            skipped = export.skipped.len(),
            "loaded export"
        );
        Ok(export)
    }
}

/// Parse export JSON text, tolerating a leading byte-order mark
pub fn parse_export(content: &str) -> Result<Export, ExportError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let value: Value = serde_json::from_str(content)?;
    load_export(value)
}
