//! End-to-end conversion tests: export file in, Org text out
mod common;

use common::{write_export, write_raw};
use serde_json::json;
use wunder2org::{ExportError, RecordKind, Storage, convert, convert_file};

fn sample_export() -> serde_json::Value {
    json!([
        {
            "title": "Errands",
            "folder": {"title": "Home"},
            "tasks": [
                {
                    "title": "Buy milk",
                    "completed": false,
                    "starred": true,
                    "tags": ["urgent"]
                },
                {"completed": true, "starred": true},
                {
                    "title": "Fix #bike",
                    "completed": false,
                    "starred": false,
                    "dueDate": "2024-02-10",
                    "subtasks": [
                        {"title": "Buy tube", "completed": true},
                        {"title": "Pump", "completed": false}
                    ],
                    "files": [{"fileName": "manual.pdf", "filePath": "files/9/manual.pdf"}]
                }
            ]
        },
        {
            "title": "Bills",
            "folder": null,
            "tasks": [
                {
                    "title": "Pay bills",
                    "completed": true,
                    "starred": false,
                    "dueDate": "2024-01-05"
                }
            ]
        }
    ])
}

// エクスポート全体の変換テスト
// タイトルのないタスクだけが除外され、他のタスクは順番通り出力されることを確認
#[test]
fn test_convert_file_end_to_end() {
    let file = write_export(&sample_export());
    let org = convert_file(file.path()).unwrap();

    let expected = "\
* NEXT Buy milk                         :Home:urgent:
* TODO Fix bike                         :Home:bike:
  SCHEDULED: <2024-02-10>
  - [X] Buy tube
  - [ ] Pump
    [[file:files/9/manual.pdf][manual.pdf]]
* DONE Pay bills
  SCHEDULED: <2024-01-05>
";
    assert_eq!(org, expected);
}

#[test]
fn test_conversion_is_idempotent() {
    let file = write_export(&sample_export());
    let first = convert_file(file.path()).unwrap();
    let second = convert_file(file.path()).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_skipped_records_are_reported_not_fatal() {
    let file = write_export(&sample_export());
    let export = Storage::new(file.path()).load().unwrap();

    assert_eq!(export.lists.len(), 2);
    assert_eq!(export.task_count(), 3);
    assert_eq!(export.skipped.len(), 1);
    assert_eq!(export.skipped[0].record(), RecordKind::Task);
    assert_eq!(convert(&export).len(), 8);
}

#[test]
fn test_byte_order_mark_is_accepted() {
    let file = write_raw("\u{feff}[{\"title\": \"Inbox\", \"tasks\": [{\"title\": \"a\"}]}]");
    assert_eq!(convert_file(file.path()).unwrap(), "* TODO a\n");
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let err = convert_file(&missing).unwrap_err();
    assert!(matches!(err, ExportError::Read { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_invalid_json_is_fatal() {
    let file = write_raw("{ this is not json");
    assert!(matches!(
        convert_file(file.path()),
        Err(ExportError::Parse(_))
    ));
}

#[test]
fn test_wrong_top_level_is_fatal() {
    let file = write_export(&json!({"title": "Inbox"}));
    assert!(matches!(
        convert_file(file.path()),
        Err(ExportError::NotAnArray)
    ));

    let file = write_export(&json!([]));
    assert!(matches!(convert_file(file.path()), Err(ExportError::Empty)));
}

#[test]
fn test_list_without_tasks_produces_no_output() {
    let file = write_export(&json!([{"title": "Empty", "tasks": null}]));
    assert_eq!(convert_file(file.path()).unwrap(), "");
}

#[test]
fn test_full_task_record() {
    let file = write_export(&json!([{
        "title": "Work",
        "folder": {"title": "Office"},
        "tasks": [{
            "title": "Quarterly report",
            "completed": false,
            "starred": false,
            "dueDate": null,
            "createdAt": "2016-05-04T08:00:00.000Z",
            "createdBy": {"name": "Alice", "email": "alice@example.com"},
            "completedAt": null,
            "completedBy": null,
            "assignee": {"name": "Bob", "email": "bob@example.com"},
            "reminders": [{"remindAt": "2016-05-10T09:00:00.000Z"}],
            "notes": [{"content": "Use the new template.\r\nAsk Carol for numbers."}],
            "comments": [{
                "text": "Draft is in the shared drive",
                "author": {"name": "Bob", "email": "bob@example.com"}
            }],
            "files": []
        }]
    }]));

    let org = convert_file(file.path()).unwrap();
    let expected = "\
* TODO Quarterly report                 :Office:
  SCHEDULED: <2016-05-10 09:00>
  :PROPERTIES:
  :CREATED-BY: [[mailto:alice@example.com][Alice]]
  :CREATED: [2016-05-04 08:00]
  :ASSIGNEE: [[mailto:bob@example.com][Bob]]
  :REMINDERS: <2016-05-10 09:00>
  :END:
    Use the new template.
    Ask Carol for numbers.
    [[mailto:bob@example.com][Bob]]: Draft is in the shared drive
";
    assert_eq!(org, expected);
}

#[test]
fn test_titled_task_survives_mistyped_optional_fields() {
    let export = wunder2org::storage::parse_export(
        &json!([{
            "title": "Inbox",
            "tasks": [{
                "title": "Keep me",
                "tags": ["a", 5],
                "createdBy": "alice",
                "dueDate": 20240105,
                "subtasks": {"title": "x"}
            }]
        }])
        .to_string(),
    )
    .unwrap();

    assert_eq!(convert(&export), vec!["* TODO Keep me                          :a:"]);
    assert_eq!(export.skipped.len(), 1);
    assert_eq!(export.skipped[0].record(), RecordKind::Subtask);
}
