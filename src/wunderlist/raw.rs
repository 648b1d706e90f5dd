//! Loosely typed records as they appear in the export JSON
//!
//! Every field is optional here. Only the fields that decide whether a record
//! exists at all (titles, text, flags) are typed; everything else stays as raw
//! JSON so that a mistyped date, tag, person or child collection never takes
//! its parent down with it. The loader turns these into the strict types of
//! the `model` module.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RawList {
    pub title: Option<String>,
    pub folder: Option<Value>,
    pub tasks: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawFolder {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub starred: Option<bool>,
    pub due_date: Option<Value>,
    pub tags: Option<Value>,
    pub created_at: Option<Value>,
    pub created_by: Option<Value>,
    pub completed_at: Option<Value>,
    pub completed_by: Option<Value>,
    pub assignee: Option<Value>,
    pub reminders: Option<Value>,
    pub subtasks: Option<Value>,
    pub notes: Option<Value>,
    pub comments: Option<Value>,
    pub files: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawPerson {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSubtask {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RawNote {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawComment {
    pub text: Option<String>,
    pub author: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFile {
    pub file_name: Option<String>,
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReminder {
    pub remind_at: Option<String>,
}
