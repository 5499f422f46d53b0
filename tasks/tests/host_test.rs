//! Tests for the stdin/stdout dispatch loop.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use tasklist::{host, Config, HostError, InputFormat, TaskEnvironment, TaskError};
use tasklist_testing::SequentialIdGenerator;

fn env() -> TaskEnvironment {
    TaskEnvironment::new(Arc::new(SequentialIdGenerator::new()))
}

fn config(input_format: InputFormat) -> Config {
    Config {
        input_format,
        ..Config::default()
    }
}

async fn run(config: &Config, input: &str) -> (Result<tasklist::TaskList, HostError>, String) {
    let mut output = Vec::new();
    let result = host::run(config, env(), input.as_bytes(), &mut output).await;
    (result, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_text_session_renders_each_change() {
    let input = "add Buy milk\nadd Walk dog\n\ntoggle task-1\ndelete task-2\n";
    let (result, output) = run(&config(InputFormat::Text), input).await;

    let list = result.unwrap();
    assert_eq!(list.len(), 1);
    assert!(list.last().unwrap().completed);

    let frames: Vec<&str> = output.split("Task List").filter(|s| !s.is_empty()).collect();
    // Initial empty list plus one frame per action
    assert_eq!(frames.len(), 5);
    assert!(output.ends_with("Task List (1/1 completed)\n  [x] Buy milk  (task-1)\n"));
}

#[tokio::test]
async fn test_misses_do_not_rerender() {
    let input = "add Buy milk\ntoggle nope\ndelete nope\n";
    let (result, output) = run(&config(InputFormat::Text), input).await;

    assert_eq!(result.unwrap().len(), 1);
    assert_eq!(output.matches("Task List").count(), 2);
}

#[tokio::test]
async fn test_json_session() {
    let input = concat!(
        r#"{"kind":"add","payload":"Buy milk"}"#,
        "\n",
        r#"{"kind":"toggle","payload":"task-1"}"#,
        "\n",
    );
    let (result, _) = run(&config(InputFormat::Json), input).await;

    let list = result.unwrap();
    assert_eq!(list.completed_count(), 1);
}

#[tokio::test]
async fn test_unrecognized_action_is_fatal() {
    let input = "add Buy milk\nrename task-1 Oat milk\nadd never reached\n";
    let (result, output) = run(&config(InputFormat::Text), input).await;

    match result {
        Err(HostError::Action(TaskError::UnrecognizedAction { kind })) => assert_eq!(kind, "rename"),
        other => panic!("expected unrecognized action, got {other:?}"),
    }
    assert!(!output.contains("never reached"));
}

#[tokio::test]
async fn test_malformed_json_is_fatal() {
    let (result, _) = run(&config(InputFormat::Json), "add Buy milk\n").await;

    assert!(matches!(
        result,
        Err(HostError::Action(TaskError::MalformedAction(_)))
    ));
}

#[tokio::test]
async fn test_hidden_ids() {
    let config = Config {
        show_ids: false,
        ..Config::default()
    };
    let (_, output) = run(&config, "add Buy milk\n").await;

    assert!(output.ends_with("  [ ] Buy milk\n"));
    assert!(!output.contains("task-1"));
}
