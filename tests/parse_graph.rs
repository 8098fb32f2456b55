use std::error::Error;

use plandag::{PlanError, PlanErrorKind, decode, parse, validate};
use plandag_test_utils::{ids, init_tracing};
use serde_json::json;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn parses_wrapped_empty_graph() -> TestResult {
    init_tracing();

    let graph = parse("Here is the plan:\n{\"tasks\":[]}\nEnd.").ok_or("expected a graph")?;
    assert!(graph.is_empty());

    let report = validate(&graph);
    assert!(report.is_valid);

    Ok(())
}

#[test]
fn keeps_task_order_and_dependencies() -> TestResult {
    let graph = decode(
        r#"{"tasks":[
            {"id":"b","dependencies":["a"]},
            {"id":"a","dependencies":[]}
        ]}"#,
    )?;

    assert_eq!(ids(&graph.tasks), vec!["b", "a"]);
    assert_eq!(graph.tasks[0].dependencies, vec!["a".to_string()]);
    assert!(graph.tasks[1].dependencies.is_empty());
    Ok(())
}

#[test]
fn extra_task_fields_pass_through() -> TestResult {
    let text = r#"{"tasks":[{
        "id":"search",
        "dependencies":[],
        "name":"Search the web",
        "instruction":"look up flights",
        "params":{"limit":3}
    }]}"#;

    let graph = decode(text)?;
    let task = &graph.tasks[0];
    assert_eq!(task.field("name"), Some(&json!("Search the web")));
    assert_eq!(task.field("params"), Some(&json!({"limit": 3})));
    assert!(task.field("id").is_none());

    // Re-serializing keeps the opaque fields.
    let value = serde_json::to_value(&graph)?;
    assert_eq!(value["tasks"][0]["instruction"], json!("look up flights"));
    assert_eq!(value["tasks"][0]["params"]["limit"], json!(3));
    Ok(())
}

#[test]
fn missing_or_null_dependencies_mean_none() -> TestResult {
    let graph = decode(r#"{"tasks":[{"id":"a"},{"id":"b","dependencies":null}]}"#)?;
    assert!(graph.tasks.iter().all(|t| t.dependencies.is_empty()));
    Ok(())
}

#[test]
fn syntax_error_is_malformed_payload() {
    init_tracing();

    let err = decode("plan: {\"tasks\": [ {\"id\": \"a\", } ]}").unwrap_err();
    assert_eq!(err.kind(), PlanErrorKind::MalformedPayload);
    assert!(matches!(err, PlanError::MalformedPayload(_)));
    assert!(err.is_decode_error());
}

#[test]
fn prose_without_payload_is_malformed_payload() {
    let err = decode("Sorry, I cannot help with that.").unwrap_err();
    assert_eq!(err.kind(), PlanErrorKind::MalformedPayload);
}

#[test]
fn missing_tasks_field_is_schema_violation() {
    let err = decode(r#"{"steps":[]}"#).unwrap_err();
    assert_eq!(err.kind(), PlanErrorKind::SchemaViolation);
    assert!(err.to_string().contains("tasks"));
}

#[test]
fn missing_id_is_schema_violation() {
    let err = decode(r#"{"tasks":[{"dependencies":[]}]}"#).unwrap_err();
    assert_eq!(err.kind(), PlanErrorKind::SchemaViolation);
}

#[test]
fn non_string_id_is_schema_violation() {
    let err = decode(r#"{"tasks":[{"id":7,"dependencies":[]}]}"#).unwrap_err();
    assert_eq!(err.kind(), PlanErrorKind::SchemaViolation);
}

#[test]
fn tasks_must_be_a_list() {
    let err = decode(r#"{"tasks":{"id":"a"}}"#).unwrap_err();
    assert_eq!(err.kind(), PlanErrorKind::SchemaViolation);
}

#[test]
fn parse_returns_none_on_any_decode_failure() {
    init_tracing();

    assert!(parse("").is_none());
    assert!(parse("no json here").is_none());
    assert!(parse("{ not json }").is_none());
    assert!(parse(r#"{"tasks":"nope"}"#).is_none());
}

#[test]
fn parse_accepts_duplicates_and_dangling_references() {
    // Structural problems are validation's job, not the parser's.
    let text = r#"{"tasks":[
        {"id":"a","dependencies":["ghost"]},
        {"id":"a","dependencies":[]}
    ]}"#;
    let graph = parse(text).expect("shape is fine");
    assert_eq!(graph.len(), 2);
}

#[test]
fn task_lookup_prefers_last_duplicate() -> TestResult {
    let graph = decode(
        r#"{"tasks":[
            {"id":"a","dependencies":[],"step":1},
            {"id":"b","dependencies":["a"]},
            {"id":"a","dependencies":["b"],"step":2}
        ]}"#,
    )?;

    let a = graph.task("a").ok_or("expected task a")?;
    assert_eq!(a.field("step"), Some(&json!(2)));
    assert_eq!(a.dependencies, vec!["b".to_string()]);
    assert_eq!(graph.task("b").map(|t| t.id.as_str()), Some("b"));
    assert!(graph.task("c").is_none());
    Ok(())
}

#[test]
fn extra_fields_keep_generator_order() -> TestResult {
    let text = r#"{"tasks":[{"zeta":1,"id":"a","alpha":2,"dependencies":[],"mid":3}]}"#;

    let graph = decode(text)?;
    let keys: Vec<&str> = graph.tasks[0].fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

    let emitted = serde_json::to_string(&graph)?;
    assert_eq!(
        emitted,
        r#"{"tasks":[{"id":"a","dependencies":[],"zeta":1,"alpha":2,"mid":3}]}"#
    );
    Ok(())
}
