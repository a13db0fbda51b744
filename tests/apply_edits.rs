use tempfile::tempdir;
use tinker::file_processing::writer::{apply_diff_edit, create_file, DiffOutcome};
use tinker::interpreter::interpret;
use tinker::models::FileToEdit;
use tinker::session::Conversation;

#[tokio::test]
async fn interpreted_batch_applies_valid_edits_and_drops_the_rest() {
    let dir = tempdir().expect("tempdir");
    let greeting = dir.path().join("a.txt");
    std::fs::write(&greeting, "hello world").expect("seed file");
    let ghost = dir.path().join("ghost.txt");

    let raw = format!(
        r#"{{
            "assistant_reply": "renaming the greeting",
            "files_to_edit": [
                {{"path": "{ghost}", "original_snippet": "x", "new_snippet": "y"}},
                {{"path": "{greeting}", "original_snippet": "hello", "new_snippet": "goodbye"}}
            ]
        }}"#,
        ghost = ghost.display(),
        greeting = greeting.display(),
    );

    let mut conversation = Conversation::new("sys");
    let response = interpret(&raw, &mut conversation);

    assert_eq!(response.rejected_edits.len(), 1);
    assert_eq!(response.files_to_edit.len(), 1);

    for edit in &response.files_to_edit {
        let outcome = apply_diff_edit(edit).await.expect("edit applies");
        assert_eq!(outcome, DiffOutcome::Applied);
    }

    assert_eq!(
        std::fs::read_to_string(&greeting).expect("read"),
        "goodbye world"
    );
    assert!(!ghost.exists());
}

#[tokio::test]
async fn malformed_response_changes_nothing() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("a.txt");
    std::fs::write(&file, "untouched").expect("seed file");

    let mut conversation = Conversation::new("sys");
    let response = interpret("{not json", &mut conversation);

    assert!(response.reply.contains("valid JSON"));
    assert!(response.files_to_create.is_empty());
    assert!(response.files_to_edit.is_empty());
    assert_eq!(std::fs::read_to_string(&file).expect("read"), "untouched");
}

#[tokio::test]
async fn creation_then_edit_in_consecutive_turns() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("src/app.py");

    // Turn one: the assistant creates a file; creations are unconditional.
    let create_raw = format!(
        r#"{{
            "assistant_reply": "creating",
            "files_to_create": [{{"path": "{}", "content": "print('hi')\n"}}]
        }}"#,
        path.display()
    );
    let mut conversation = Conversation::new("sys");
    let response = interpret(&create_raw, &mut conversation);
    for file in &response.files_to_create {
        create_file(&file.path, &file.content).await.expect("create");
    }
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "print('hi')\n"
    );

    // Turn two: an edit against the file it just created passes the filter,
    // since the path is now readable.
    let edit_raw = format!(
        r#"{{
            "assistant_reply": "editing",
            "files_to_edit": [
                {{"path": "{}", "original_snippet": "hi", "new_snippet": "bye"}}
            ]
        }}"#,
        path.display()
    );
    let response = interpret(&edit_raw, &mut conversation);
    assert!(response.rejected_edits.is_empty());
    for edit in &response.files_to_edit {
        assert_eq!(
            apply_diff_edit(edit).await.expect("edit applies"),
            DiffOutcome::Applied
        );
    }
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "print('bye')\n"
    );
}

#[tokio::test]
async fn overlapping_edits_apply_in_list_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("f.txt");
    std::fs::write(&path, "aaa").expect("seed file");

    let edits = vec![
        FileToEdit {
            path: path.to_str().unwrap().to_string(),
            original_snippet: "aa".to_string(),
            new_snippet: "b".to_string(),
        },
        FileToEdit {
            path: path.to_str().unwrap().to_string(),
            original_snippet: "ba".to_string(),
            new_snippet: "c".to_string(),
        },
    ];

    // Each edit re-reads the file, so the second sees the first's output.
    for edit in &edits {
        assert_eq!(
            apply_diff_edit(edit).await.expect("edit applies"),
            DiffOutcome::Applied
        );
    }
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "c");
}
