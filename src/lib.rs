//! Wunderlist to Org Mode converter
//!
//! This library converts a Wunderlist task export (JSON) into an Org Mode
//! outline. Each task becomes one heading with a TODO/NEXT/DONE keyword,
//! tags, an optional `SCHEDULED:` line, a property drawer with its metadata,
//! and its subtasks, notes, comments and attachments nested below.
//!
//! # Architecture
//!
//! The conversion is a single pass through three layers:
//! - **Loading**: `storage` and `wunderlist` - Read the file and validate every
//!   record into a typed value, skipping records that cannot be read
//! - **Mapping**: `outline` - Apply the state, tag, scheduling and body rules
//! - **Emitting**: `formatting` - Render outline entries as Org lines
//!
//! # Example
//!
//! ```no_run
//! use wunder2org::convert_file;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let org = convert_file("wunderlist-export.json")?;
//!     print!("{}", org);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
pub mod logging;
pub mod outline;
pub mod storage;
pub mod validation;
pub mod wunderlist;

use std::path::Path;

// Re-export commonly used types
pub use error::{ExportError, RecordKind, RecordSkip};
pub use outline::{OutlineEntry, TodoState};
pub use storage::Storage;
pub use wunderlist::Export;

/// Convert a loaded export into Org lines
///
/// # Example
/// ```
/// # use wunder2org::{convert, storage::parse_export};
/// let export = parse_export(r#"[{"title": "Inbox", "tasks": [{"title": "Pay bills"}]}]"#).unwrap();
/// assert_eq!(convert(&export), vec!["* TODO Pay bills"]);
/// ```
pub fn convert(export: &Export) -> Vec<String> {
    formatting::format_outline(&outline::map_export(export))
}

/// Read an export file and render it as an Org document
///
/// # Errors
/// Returns [`ExportError`] if the file is missing, unreadable, or not a
/// Wunderlist export. Unreadable records inside a valid export are skipped.
pub fn convert_file(path: impl AsRef<Path>) -> Result<String, ExportError> {
    let export = Storage::new(path).load()?;
    Ok(formatting::render(&outline::map_export(&export)))
}
