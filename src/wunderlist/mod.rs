//! Wunderlist export records
//!
//! This module contains the data structures of a Wunderlist export and the
//! logic that loads them from JSON. It is split into submodules:
//! - `raw`: loosely typed serde records mirroring the export JSON
//! - `model`: strict typed records used by the outline mapper
//! - `load`: per-record validation from raw JSON into the model

mod load;
mod model;
mod raw;

// Re-export all public types
pub use load::{
    Loaded, SkipLog, load_attachment, load_comment, load_export, load_list, load_note,
    load_reminder, load_subtask, load_task,
};
pub use model::{
    Attachment, Comment, Export, Folder, List, ListedTask, Note, Person, Reminder, Subtask, Task,
    Timestamp,
};
