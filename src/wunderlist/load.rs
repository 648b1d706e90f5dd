//! Conversion from raw export JSON into typed records
//!
//! Each record is validated on its own. A record that lacks a required field
//! becomes [`Loaded::Skipped`]; its siblings are unaffected.

use super::model::{
    Attachment, Comment, Export, Folder, List, Note, Person, Reminder, Subtask, Task, Timestamp,
};
use super::raw::{
    RawComment, RawFile, RawFolder, RawList, RawNote, RawPerson, RawReminder, RawSubtask,
    RawTask,
};
use crate::error::{ExportError, RecordKind, RecordSkip};
use crate::validation::{non_blank, normalize_string_line_endings, parse_timestamp};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Outcome of loading a single record
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// The record was read successfully
    Record(T),
    /// The record was unreadable and is left out
    Skipped(RecordSkip),
}

impl<T> Loaded<T> {
    /// The record, if it was read
    pub fn record(self) -> Option<T> {
        match self {
            Loaded::Record(record) => Some(record),
            Loaded::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Loaded::Skipped(_))
    }
}

impl<T> From<Result<T, RecordSkip>> for Loaded<T> {
    fn from(result: Result<T, RecordSkip>) -> Self {
        match result {
            Ok(record) => Loaded::Record(record),
            Err(skip) => Loaded::Skipped(skip),
        }
    }
}

/// Collects the skip signals produced while walking the export
#[derive(Debug, Default)]
pub struct SkipLog {
    skipped: Vec<RecordSkip>,
}

impl SkipLog {
    /// Keep a loaded record, or note why it was skipped
    pub fn keep<T>(&mut self, loaded: Loaded<T>) -> Option<T> {
        match loaded {
            Loaded::Record(record) => Some(record),
            Loaded::Skipped(skip) => {
                debug!(record = %skip.record(), "skipping record: {}", skip);
                self.skipped.push(skip);
                None
            }
        }
    }

    pub fn into_inner(self) -> Vec<RecordSkip> {
        self.skipped
    }
}

/// Load a whole export from its parsed JSON
///
/// # Errors
/// Fails if the top level is not a non-empty array. Individual unreadable
/// records never fail the load.
pub fn load_export(value: Value) -> Result<Export, ExportError> {
    let Value::Array(items) = value else {
        return Err(ExportError::NotAnArray);
    };
    if items.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut skips = SkipLog::default();
    let mut lists = Vec::with_capacity(items.len());
    for item in items {
        let loaded = load_list(item, &mut skips);
        if let Some(list) = skips.keep(loaded) {
            lists.push(list);
        }
    }

    Ok(Export {
        lists,
        skipped: skips.into_inner(),
    })
}

/// Load a list and the tasks it owns
pub fn load_list(value: Value, skips: &mut SkipLog) -> Loaded<List> {
    let raw: RawList = match parse_raw(value, RecordKind::List) {
        Ok(raw) => raw,
        Err(skip) => return Loaded::Skipped(skip),
    };

    let folder = raw.folder.and_then(load_folder);
    let tasks = items_of(raw.tasks, RecordKind::Task, skips)
        .into_iter()
        .filter_map(|task| {
            let loaded = load_task(task, skips);
            skips.keep(loaded)
        })
        .collect();

    Loaded::Record(List {
        title: non_blank(raw.title),
        folder,
        tasks,
    })
}

/// A folder is optional decoration; anything unreadable means "no folder"
fn load_folder(value: Value) -> Option<Folder> {
    if value.is_null() {
        return None;
    }
    let raw: RawFolder = serde_json::from_value(value).ok()?;
    non_blank(raw.title).map(|title| Folder { title })
}

/// Load a task and everything it owns
pub fn load_task(value: Value, skips: &mut SkipLog) -> Loaded<Task> {
    let raw: RawTask = match parse_raw(value, RecordKind::Task) {
        Ok(raw) => raw,
        Err(skip) => return Loaded::Skipped(skip),
    };
    let Some(title) = non_blank(raw.title) else {
        return Loaded::Skipped(RecordSkip::MissingField {
            record: RecordKind::Task,
            field: "title",
        });
    };

    let subtasks = children_of(raw.subtasks, RecordKind::Subtask, load_subtask, skips);
    let notes = children_of(raw.notes, RecordKind::Note, load_note, skips);
    let comments = children_of(raw.comments, RecordKind::Comment, load_comment, skips);
    let attachments = children_of(raw.files, RecordKind::Attachment, load_attachment, skips);
    let reminders = children_of(raw.reminders, RecordKind::Reminder, load_reminder, skips);

    Loaded::Record(Task {
        title,
        completed: raw.completed.unwrap_or(false),
        starred: raw.starred.unwrap_or(false),
        due_date: timestamp_of(raw.due_date),
        tags: tags_of(raw.tags),
        subtasks,
        notes,
        comments,
        attachments,
        reminders,
        created_at: timestamp_of(raw.created_at),
        created_by: raw.created_by.and_then(load_person),
        completed_at: timestamp_of(raw.completed_at),
        completed_by: raw.completed_by.and_then(load_person),
        assignee: raw.assignee.and_then(load_person),
    })
}

/// Unpack a JSON array of child records
///
/// A missing or null collection is empty. Any other non-array value is
/// noted as one skipped child; the owner is kept.
fn items_of(value: Option<Value>, record: RecordKind, skips: &mut SkipLog) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            let skip = RecordSkip::Malformed {
                record,
                reason: format!("expected an array of {}s, found {}", record, json_kind(&other)),
            };
            skips.keep(Loaded::<Value>::Skipped(skip));
            Vec::new()
        }
    }
}

fn children_of<T>(
    value: Option<Value>,
    record: RecordKind,
    load: fn(Value) -> Loaded<T>,
    skips: &mut SkipLog,
) -> Vec<T> {
    items_of(value, record, skips)
        .into_iter()
        .filter_map(|item| skips.keep(load(item)))
        .collect()
}

/// A date field; anything that is not a parseable date string is absent
fn timestamp_of(value: Option<Value>) -> Option<Timestamp> {
    match value {
        Some(Value::String(s)) => parse_timestamp(&s),
        _ => None,
    }
}

/// Explicit tags; non-string entries are dropped
fn tags_of(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn load_subtask(value: Value) -> Loaded<Subtask> {
    parse_raw::<RawSubtask>(value, RecordKind::Subtask)
        .and_then(|raw| {
            let title = required(raw.title, RecordKind::Subtask, "title")?;
            Ok(Subtask {
                title,
                completed: raw.completed.unwrap_or(false),
            })
        })
        .into()
}

pub fn load_note(value: Value) -> Loaded<Note> {
    parse_raw::<RawNote>(value, RecordKind::Note)
        .and_then(|raw| {
            let content = required(raw.content, RecordKind::Note, "content")?;
            Ok(Note {
                content: normalize_string_line_endings(&content),
            })
        })
        .into()
}

pub fn load_comment(value: Value) -> Loaded<Comment> {
    parse_raw::<RawComment>(value, RecordKind::Comment)
        .and_then(|raw| {
            let text = required(raw.text, RecordKind::Comment, "text")?;
            Ok(Comment {
                text: normalize_string_line_endings(&text),
                author: raw.author.and_then(load_person),
            })
        })
        .into()
}

pub fn load_attachment(value: Value) -> Loaded<Attachment> {
    parse_raw::<RawFile>(value, RecordKind::Attachment)
        .and_then(|raw| {
            let path = non_blank(raw.file_path);
            let name = non_blank(raw.file_name)
                .or_else(|| path.as_deref().map(file_name_of))
                .ok_or(RecordSkip::MissingField {
                    record: RecordKind::Attachment,
                    field: "fileName",
                })?;
            let path = path.filter(|p| *p != name);
            Ok(Attachment { name, path })
        })
        .into()
}

pub fn load_reminder(value: Value) -> Loaded<Reminder> {
    parse_raw::<RawReminder>(value, RecordKind::Reminder)
        .and_then(|raw| {
            let remind_at = required(raw.remind_at, RecordKind::Reminder, "remindAt")?;
            let remind_at = parse_timestamp(&remind_at).ok_or_else(|| RecordSkip::Malformed {
                record: RecordKind::Reminder,
                reason: format!("unrecognized date '{}'", remind_at),
            })?;
            Ok(Reminder { remind_at })
        })
        .into()
}

/// A person is optional decoration; anything unreadable means "nobody"
fn load_person(value: Value) -> Option<Person> {
    let raw: RawPerson = serde_json::from_value(value).ok()?;
    let person = Person {
        name: non_blank(raw.name),
        email: non_blank(raw.email),
    };
    (!person.is_anonymous()).then_some(person)
}

fn parse_raw<T: DeserializeOwned>(value: Value, record: RecordKind) -> Result<T, RecordSkip> {
    serde_json::from_value(value).map_err(|e| RecordSkip::Malformed {
        record,
        reason: e.to_string(),
    })
}

fn required(
    value: Option<String>,
    record: RecordKind,
    field: &'static str,
) -> Result<String, RecordSkip> {
    non_blank(value).ok_or(RecordSkip::MissingField { record, field })
}

/// Last path segment of an attachment path
fn file_name_of(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
        .to_string()
}
