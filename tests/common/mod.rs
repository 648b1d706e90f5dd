//! Common test utilities for integration tests

#![allow(dead_code)]

use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;
use wunder2org::wunderlist::{Folder, List, ListedTask, Subtask, Task};

/// Write export JSON into a temporary file
pub fn write_export(json: &Value) -> NamedTempFile {
    write_raw(&json.to_string())
}

/// Write arbitrary text into a temporary file
pub fn write_raw(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Create a test task with only a title
pub fn create_test_task(title: &str) -> Task {
    Task {
        title: title.to_string(),
        ..Default::default()
    }
}

/// Create a subtask
pub fn subtask(title: &str, completed: bool) -> Subtask {
    Subtask {
        title: title.to_string(),
        completed,
    }
}

/// Create a list holding the given tasks, optionally filed under a folder
pub fn create_test_list(title: &str, folder: Option<&str>, tasks: Vec<Task>) -> List {
    List {
        title: Some(title.to_string()),
        folder: folder.map(|f| Folder {
            title: f.to_string(),
        }),
        tasks,
    }
}

/// Pair the first task of a list with its list
pub fn first_task(list: &List) -> ListedTask<'_> {
    ListedTask {
        list,
        task: &list.tasks[0],
    }
}
