//! Outline mapper
//!
//! Turns loaded Wunderlist tasks into [`OutlineEntry`] values. Every function
//! here is pure: it reads the record tree and returns derived data, so the
//! same export always maps to the same entries.

use crate::validation::{sanitize_tag, single_line};
use crate::wunderlist::{
    Attachment, Comment, Export, Folder, ListedTask, Person, Subtask, Task, Timestamp,
};
use std::fmt;

/// Org TODO keyword assigned to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoState {
    Todo,
    Next,
    Done,
}

impl TodoState {
    /// Pick the state for a task
    ///
    /// Completion wins over the star: a completed starred task is DONE.
    pub fn of(task: &Task) -> Self {
        if task.completed {
            TodoState::Done
        } else if task.starred {
            TodoState::Next
        } else {
            TodoState::Todo
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            TodoState::Todo => "TODO",
            TodoState::Next => "NEXT",
            TodoState::Done => "DONE",
        }
    }
}

impl fmt::Display for TodoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Value of a single property drawer entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Person(Person),
    /// A past event, rendered as an inactive timestamp
    Inactive(Timestamp),
    /// Future events, rendered as active timestamps
    Active(Vec<Timestamp>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub value: PropertyValue,
}

/// A checklist line under a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub text: String,
    pub checked: bool,
}

impl From<&Subtask> for ChecklistItem {
    fn from(subtask: &Subtask) -> Self {
        Self {
            text: single_line(&subtask.title),
            checked: subtask.completed,
        }
    }
}

/// One heading plus everything nested below it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub state: TodoState,
    pub title: String,
    pub tags: Vec<String>,
    pub scheduled: Option<Timestamp>,
    pub properties: Vec<Property>,
    pub checklist: Vec<ChecklistItem>,
    pub notes: Vec<String>,
    pub comments: Vec<Comment>,
    pub attachments: Vec<Attachment>,
}

/// Characters that end a hashtag when they trail it
const SENTENCE_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', ')', ']', '}'];

/// Split a Wunderlist title into display text and hashtags
///
/// `#word` at the start of a word becomes the tag `word`; the word itself
/// stays in the title without its `#`. Trailing sentence punctuation and
/// closing brackets are not part of the tag.
///
/// # Example
/// ```
/// # use wunder2org::outline::split_title;
/// let (title, tags) = split_title("Call mom #family, #phone");
/// assert_eq!(title, "Call mom family, phone");
/// assert_eq!(tags, ["family", "phone"]);
/// ```
pub fn split_title(title: &str) -> (String, Vec<String>) {
    let line = single_line(title);
    let mut text = String::with_capacity(line.len());
    let mut tags = Vec::new();

    for (i, word) in line.split(' ').enumerate() {
        if i > 0 {
            text.push(' ');
        }
        let hashtag = word
            .strip_prefix('#')
            .map(|rest| (rest, rest.trim_end_matches(SENTENCE_PUNCTUATION)))
            .filter(|(_, tag)| !tag.is_empty() && !tag.starts_with('#'));

        match hashtag {
            Some((rest, tag)) => {
                text.push_str(rest);
                tags.push(tag.to_string());
            }
            None => text.push_str(word),
        }
    }

    (text, tags)
}

/// Compute the tags of a task
///
/// The folder-derived tag comes first, followed by the explicit tags and then
/// the title hashtags. Repeats collapse onto their first occurrence.
pub fn task_tags(task: &Task, folder: Option<&Folder>) -> Vec<String> {
    let (_, hashtags) = split_title(&task.title);
    let labels = folder
        .map(|f| f.title.as_str())
        .into_iter()
        .chain(task.tags.iter().map(String::as_str))
        .chain(hashtags.iter().map(String::as_str));

    let mut tags: Vec<String> = Vec::new();
    for tag in labels.filter_map(sanitize_tag) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// The scheduling date of a task
///
/// The due date takes precedence and is scheduled as a whole day. Without one,
/// the earliest reminder is used with its time of day.
pub fn scheduled(task: &Task) -> Option<Timestamp> {
    if let Some(due) = task.due_date {
        return Some(Timestamp::Date(due.date()));
    }
    task.reminders
        .iter()
        .map(|r| r.remind_at)
        .min_by_key(Timestamp::as_datetime)
}

/// Metadata carried in the property drawer, in a fixed order
pub fn task_properties(task: &Task) -> Vec<Property> {
    let mut properties = Vec::new();
    let mut push = |name, value| properties.push(Property { name, value });

    if let Some(person) = &task.created_by {
        push("CREATED-BY", PropertyValue::Person(person.clone()));
    }
    if let Some(at) = task.created_at {
        push("CREATED", PropertyValue::Inactive(at));
    }
    if let Some(person) = &task.completed_by {
        push("COMPLETED-BY", PropertyValue::Person(person.clone()));
    }
    if let Some(at) = task.completed_at {
        push("COMPLETED", PropertyValue::Inactive(at));
    }
    if let Some(person) = &task.assignee {
        push("ASSIGNEE", PropertyValue::Person(person.clone()));
    }
    if !task.reminders.is_empty() {
        let reminders = task.reminders.iter().map(|r| r.remind_at).collect();
        push("REMINDERS", PropertyValue::Active(reminders));
    }

    properties
}

/// Map a single task to its outline entry
pub fn map_task(listed: ListedTask<'_>) -> OutlineEntry {
    let task = listed.task;
    let (title, _) = split_title(&task.title);

    OutlineEntry {
        state: TodoState::of(task),
        title,
        tags: task_tags(task, listed.folder()),
        scheduled: scheduled(task),
        properties: task_properties(task),
        checklist: task.subtasks.iter().map(ChecklistItem::from).collect(),
        notes: task.notes.iter().map(|n| n.content.clone()).collect(),
        comments: task.comments.clone(),
        attachments: task.attachments.clone(),
    }
}

/// Map tasks to outline entries, one per task, in input order
pub fn map_tasks<'a>(tasks: impl IntoIterator<Item = ListedTask<'a>>) -> Vec<OutlineEntry> {
    tasks.into_iter().map(map_task).collect()
}

/// Map every task of an export
pub fn map_export(export: &Export) -> Vec<OutlineEntry> {
    map_tasks(export.tasks())
}
