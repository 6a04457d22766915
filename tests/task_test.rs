use todo_cli_rs::task::Task;

#[test]
fn test_task_creation() {
    let task = Task::new("Buy milk").unwrap();

    assert_eq!(task.description, "Buy milk");
    assert!(!task.done);
}

#[test]
fn test_task_creation_strips_whitespace() {
    let task = Task::new("  Walk dog \n").unwrap();
    assert_eq!(task.description, "Walk dog");
}

#[test]
fn test_task_creation_rejects_empty() {
    assert!(Task::new("").is_err());
    assert!(Task::new("   ").is_err());
    assert!(Task::new("\t\n").is_err());
}

#[test]
fn test_mark_done() {
    let mut task = Task::new("Buy milk").unwrap();

    assert!(task.mark_done());
    assert!(task.done);

    // Second call reports no change and keeps the flag set
    assert!(!task.mark_done());
    assert!(task.done);
}

#[test]
fn test_status_icon() {
    let mut task = Task::new("Buy milk").unwrap();
    assert_eq!(task.status_icon(), "❌");

    task.mark_done();
    assert_eq!(task.status_icon(), "✔️");
}

#[test]
fn test_task_serde_round_trip() {
    let mut task = Task::new("Café au lait ☕").unwrap();
    task.mark_done();

    let json = serde_json::to_string(&task).unwrap();
    let parsed: Task = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, task);
}

#[test]
fn test_task_deserialization_defaults_done() {
    let parsed: Task = serde_json::from_str(r#"{"description": "Buy milk"}"#).unwrap();
    assert!(!parsed.done);
}

#[test]
fn test_task_deserialization_ignores_extra_fields() {
    let json = r#"{"description": "Buy milk", "done": true, "priority": "high"}"#;
    let parsed: Task = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.description, "Buy milk");
    assert!(parsed.done);
}
