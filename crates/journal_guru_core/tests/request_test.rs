//! Wire-format tests for the shared request and result types.

use journal_guru_core::{GenerationRequest, GenerationResult, render_instruction};

#[test]
fn test_request_uses_camel_case_wire_names() {
    let request = GenerationRequest::new("26-35", "new job", "stoic", "3-5");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["age"], "26-35");
    assert_eq!(value["issue"], "new job");
    assert_eq!(value["lens"], "stoic");
    assert_eq!(value["numPrompts"], "3-5");
}

#[test]
fn test_missing_fields_become_empty() {
    let request: GenerationRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request, GenerationRequest::default());
    assert!(!request.is_complete());
}

#[test]
fn test_each_empty_field_makes_request_incomplete() {
    let full = GenerationRequest::new("26-35", "new job", "stoic", "1");
    assert!(full.is_complete());

    let variants = [
        GenerationRequest::new("", "new job", "stoic", "1"),
        GenerationRequest::new("26-35", "", "stoic", "1"),
        GenerationRequest::new("26-35", "new job", "", "1"),
        GenerationRequest::new("26-35", "new job", "stoic", ""),
    ];
    for request in variants {
        assert!(!request.is_complete(), "{request:?}");
    }
}

#[test]
fn test_builder_matches_constructor() {
    let built = GenerationRequest::builder()
        .age("36-45")
        .issue("Being More Present")
        .lens("christian")
        .num_prompts("15")
        .build()
        .expect("Valid request");

    assert_eq!(
        built,
        GenerationRequest::new("36-45", "Being More Present", "christian", "15")
    );
}

#[test]
fn test_result_preserves_whitespace() {
    let text = "  1. Reflect...\n\n2. Consider...  \n";
    let result = GenerationResult::new(text);
    let json = serde_json::to_string(&result).unwrap();
    let back: GenerationResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back.prompts(), text);
}

#[test]
fn test_concrete_scenario_instruction() {
    let request = GenerationRequest::new("26-35", "new job", "stoic", "3-5");
    let text = render_instruction(&request);

    assert!(text.contains("26-35"));
    assert!(text.contains("new job"));
    assert!(text.contains("stoic perspective"));
    assert!(text.contains("3 to 5 journal prompts"));
}
