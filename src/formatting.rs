//! Line emitter for Org Mode output
//!
//! This module turns [`OutlineEntry`] values into literal Org lines. The
//! layout is fixed:
//!
//! ```text
//! * NEXT <title>                         :tag1:tag2:
//!   SCHEDULED: <2024-01-05>
//!   :PROPERTIES:
//!   :CREATED-BY: [[mailto:alice@example.com][Alice]]
//!   :END:
//!   - [X] <done subtask>
//!   - [ ] <open subtask>
//!     <note or comment text>
//!     [[file:<attachment>]]
//! ```

use crate::outline::{ChecklistItem, OutlineEntry, Property, PropertyValue};
use crate::wunderlist::{Attachment, Comment, Person, Timestamp};

/// Column at which heading tags start
pub const TAG_COLUMN: usize = 40;

const PLANNING_INDENT: &str = "  ";
const TEXT_INDENT: &str = "    ";

/// Format a timestamp in Org syntax
///
/// # Arguments
/// * `timestamp` - Date or date-time to format
/// * `active` - `<...>` when true, `[...]` when false
pub fn format_timestamp(timestamp: &Timestamp, active: bool) -> String {
    let inner = match timestamp {
        Timestamp::Date(date) => date.format("%Y-%m-%d").to_string(),
        Timestamp::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
    };
    if active {
        format!("<{}>", inner)
    } else {
        format!("[{}]", inner)
    }
}

/// Format a person as an Org mailto link where an email is known
pub fn format_person(person: &Person) -> String {
    match (&person.name, &person.email) {
        (Some(name), Some(email)) => format!("[[mailto:{}][{}]]", email, name),
        (None, Some(email)) => format!("[[mailto:{}]]", email),
        (Some(name), None) => name.clone(),
        (None, None) => String::new(),
    }
}

/// Check if a word would be read by Org as a heading tag group (`:a:b:`)
fn looks_like_tag_group(word: &str) -> bool {
    word.len() >= 3
        && word.starts_with(':')
        && word.ends_with(':')
        && word
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '@' | '#' | '%' | ':'))
}

/// Keep a title's last word from being parsed as tags
///
/// A title ending in `:word:` gets that word wrapped in verbatim markup.
pub fn guard_title(title: &str) -> String {
    match title.rsplit_once(' ') {
        Some((head, last)) if looks_like_tag_group(last) => format!("{} ={}=", head, last),
        None if looks_like_tag_group(title) => format!("={}=", title),
        _ => title.to_string(),
    }
}

/// Format the heading line of an entry, with tags aligned to [`TAG_COLUMN`]
pub fn format_heading(entry: &OutlineEntry) -> String {
    let mut heading = format!("* {} {}", entry.state, guard_title(&entry.title));
    if entry.tags.is_empty() {
        return heading;
    }

    let width = heading.chars().count();
    let padding = TAG_COLUMN.saturating_sub(width).max(1);
    heading.push_str(&" ".repeat(padding));
    heading.push(':');
    heading.push_str(&entry.tags.join(":"));
    heading.push(':');
    heading
}

fn format_property(property: &Property) -> String {
    let value = match &property.value {
        PropertyValue::Person(person) => format_person(person),
        PropertyValue::Inactive(at) => format_timestamp(at, false),
        PropertyValue::Active(stamps) => stamps
            .iter()
            .map(|at| format_timestamp(at, true))
            .collect::<Vec<_>>()
            .join(" "),
    };
    format!("{}:{}: {}", PLANNING_INDENT, property.name, value)
}

fn format_checklist_item(item: &ChecklistItem) -> String {
    let mark = if item.checked { 'X' } else { ' ' };
    format!("{}- [{}] {}", PLANNING_INDENT, mark, item.text)
}

/// Indent a block of free text, leaving blank lines empty
fn push_text_block(lines: &mut Vec<String>, text: &str) {
    for line in text.trim_matches('\n').split('\n') {
        let line = line.trim_end();
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{}{}", TEXT_INDENT, line));
        }
    }
}

fn comment_text(comment: &Comment) -> String {
    match &comment.author {
        Some(author) => format!("{}: {}", format_person(author), comment.text),
        None => comment.text.clone(),
    }
}

fn format_attachment(attachment: &Attachment) -> String {
    match &attachment.path {
        Some(path) => format!("{}[[file:{}][{}]]", TEXT_INDENT, path, attachment.name),
        None => format!("{}[[file:{}]]", TEXT_INDENT, attachment.name),
    }
}

/// Format one entry into its lines
pub fn format_entry(entry: &OutlineEntry) -> Vec<String> {
    let mut lines = vec![format_heading(entry)];

    if let Some(at) = &entry.scheduled {
        lines.push(format!(
            "{}SCHEDULED: {}",
            PLANNING_INDENT,
            format_timestamp(at, true)
        ));
    }

    if !entry.properties.is_empty() {
        lines.push(format!("{}:PROPERTIES:", PLANNING_INDENT));
        lines.extend(entry.properties.iter().map(format_property));
        lines.push(format!("{}:END:", PLANNING_INDENT));
    }

    lines.extend(entry.checklist.iter().map(format_checklist_item));

    for note in &entry.notes {
        push_text_block(&mut lines, note);
    }
    for comment in &entry.comments {
        push_text_block(&mut lines, &comment_text(comment));
    }

    lines.extend(entry.attachments.iter().map(format_attachment));
    lines
}

/// Format all entries, in order
pub fn format_outline(entries: &[OutlineEntry]) -> Vec<String> {
    entries.iter().flat_map(format_entry).collect()
}

/// Render entries as a single newline-terminated document
pub fn render(entries: &[OutlineEntry]) -> String {
    let mut out = String::new();
    for line in format_outline(entries) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
