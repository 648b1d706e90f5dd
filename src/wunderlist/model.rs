use crate::error::RecordSkip;
use chrono::{NaiveDate, NaiveDateTime};

/// A point in time taken from the export
///
/// Due dates are plain calendar days; reminders and audit timestamps carry a
/// time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Timestamp {
    /// The calendar day of this timestamp
    pub fn date(&self) -> NaiveDate {
        match self {
            Timestamp::Date(date) => *date,
            Timestamp::DateTime(dt) => dt.date(),
        }
    }

    /// This timestamp as a date-time, with plain dates at midnight
    pub fn as_datetime(&self) -> NaiveDateTime {
        match self {
            Timestamp::Date(date) => date.and_time(chrono::NaiveTime::MIN),
            Timestamp::DateTime(dt) => *dt,
        }
    }
}

/// A Wunderlist user referenced as creator, completer, assignee or comment author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Person {
    /// Check if neither a name nor an email is known
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// A named grouping of lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub title: String,
}

/// A named collection of tasks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    /// List title; a list without one still contributes its tasks
    pub title: Option<String>,
    /// Folder this list is filed under, if any
    pub folder: Option<Folder>,
    pub tasks: Vec<Task>,
}

/// A single to-do item with everything it owns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    /// Title as written in Wunderlist, hashtags included
    pub title: String,
    pub completed: bool,
    pub starred: bool,
    pub due_date: Option<Timestamp>,
    /// Explicit tags from the export, in their original order
    pub tags: Vec<String>,
    pub subtasks: Vec<Subtask>,
    pub notes: Vec<Note>,
    pub comments: Vec<Comment>,
    pub attachments: Vec<Attachment>,
    pub reminders: Vec<Reminder>,
    pub created_at: Option<Timestamp>,
    pub created_by: Option<Person>,
    pub completed_at: Option<Timestamp>,
    pub completed_by: Option<Person>,
    pub assignee: Option<Person>,
}

/// A checklist item owned by a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtask {
    pub title: String,
    pub completed: bool,
}

/// Free text attached to a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub content: String,
}

/// A comment left on a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub author: Option<Person>,
}

/// A file attached to a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Display name of the file
    pub name: String,
    /// Location of the file inside the export, when it differs from the name
    pub path: Option<String>,
}

impl Attachment {
    /// The link target for this attachment
    pub fn target(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}

/// A reminder set on a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder {
    pub remind_at: Timestamp,
}

/// A fully loaded export
///
/// Records that could not be read are absent from `lists`; the reasons they
/// were dropped are kept in `skipped`.
#[derive(Debug, Clone, Default)]
pub struct Export {
    pub lists: Vec<List>,
    pub skipped: Vec<RecordSkip>,
}

/// A task together with the list that owns it
#[derive(Debug, Clone, Copy)]
pub struct ListedTask<'a> {
    pub list: &'a List,
    pub task: &'a Task,
}

impl<'a> ListedTask<'a> {
    /// The folder of the owning list, if any
    pub fn folder(&self) -> Option<&'a Folder> {
        self.list.folder.as_ref()
    }
}

impl Export {
    /// Iterate over every task in export order (list by list)
    pub fn tasks(&self) -> impl Iterator<Item = ListedTask<'_>> {
        self.lists
            .iter()
            .flat_map(|list| list.tasks.iter().map(move |task| ListedTask { list, task }))
    }

    /// Count tasks across all lists
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|list| list.tasks.len()).sum()
    }
}
