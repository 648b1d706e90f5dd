//! Error types for loading Wunderlist exports
//!
//! Two kinds of failure exist:
//! - [`ExportError`]: the export as a whole cannot be read. The conversion stops.
//! - [`RecordSkip`]: a single record is unreadable. The record is dropped and
//!   loading continues with its next sibling.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure to read or parse the export file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not read export file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export file is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("export file must contain a JSON array of lists")]
    NotAnArray,

    #[error("export file contains no lists")]
    Empty,
}

/// Kind of record a [`RecordSkip`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    List,
    Task,
    Subtask,
    Note,
    Comment,
    Attachment,
    Reminder,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::List => "list",
            RecordKind::Task => "task",
            RecordKind::Subtask => "subtask",
            RecordKind::Note => "note",
            RecordKind::Comment => "comment",
            RecordKind::Attachment => "attachment",
            RecordKind::Reminder => "reminder",
        };
        f.write_str(name)
    }
}

/// Reason a single record was left out of the output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordSkip {
    #[error("{record} is missing required field '{field}'")]
    MissingField {
        record: RecordKind,
        field: &'static str,
    },

    #[error("{record} could not be read: {reason}")]
    Malformed { record: RecordKind, reason: String },
}

impl RecordSkip {
    /// The kind of record that was skipped
    pub fn record(&self) -> RecordKind {
        match self {
            RecordSkip::MissingField { record, .. } | RecordSkip::Malformed { record, .. } => {
                *record
            }
        }
    }
}
