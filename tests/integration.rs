// ABOUTME: Integration tests driving the fixtures the way an e2e harness does.
// ABOUTME: Goes through the public prelude and the shared registry only.

use e2e_tools::prelude::*;

#[tokio::test]
async fn test_harness_roundtrip_over_registry() {
    let registry = Registry::with_fixtures().await;

    let cases = [
        ("e2e_custom_tool", serde_json::json!({"message": "hi"}), "Echo: hi"),
        ("move_to_agent", serde_json::json!({"agent_name": "Ann"}), "Moved to Ann."),
        ("move_to_location", serde_json::json!({"location": "park"}), "Moved to park."),
        ("wave_at", serde_json::json!({"agent_name": "Ann"}), "You waved at Ann."),
        (
            "start_conversation",
            serde_json::json!({"agent_name": "Ann", "message": "hey"}),
            "Started conversation with Ann: hey",
        ),
        (
            "e2e_string_utils",
            serde_json::json!({"action": "length", "text": "abc"}),
            "3",
        ),
    ];

    for (name, params, expected) in cases {
        let result = registry.execute(name, params).await.unwrap();
        assert!(!result.is_error, "{} reported an error", name);
        assert_eq!(result.content, expected, "unexpected output from {}", name);
    }
}

#[tokio::test]
async fn test_definitions_match_function_parameters() {
    let registry = Registry::with_fixtures().await;
    let defs = registry.to_definitions().await;

    let required = |name: &str| -> Vec<String> {
        let def = defs.iter().find(|d| d.name == name).unwrap();
        serde_json::from_value(def.input_schema["required"].clone()).unwrap()
    };

    assert_eq!(required("e2e_custom_tool"), vec!["message"]);
    assert_eq!(required("move_to_agent"), vec!["agent_name"]);
    assert_eq!(required("move_to_location"), vec!["location"]);
    assert_eq!(required("wave_at"), vec!["agent_name"]);
    assert_eq!(required("start_conversation"), vec!["agent_name", "message"]);
    assert_eq!(required("e2e_string_utils"), vec!["action", "text"]);

    for def in &defs {
        assert_eq!(def.input_schema["type"], "object");
        assert!(!def.description.is_empty());
    }
}

#[tokio::test]
async fn test_no_fixture_requires_approval() {
    for tool in all_tools() {
        assert!(!tool.requires_approval(&serde_json::json!({})));
    }
}

#[tokio::test]
async fn test_concurrent_calls_share_registry() {
    let registry = Registry::with_fixtures().await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let registry = registry.clone();
            tokio::spawn(async move {
                registry
                    .execute(
                        "e2e_custom_tool",
                        serde_json::json!({"message": format!("m{}", i)}),
                    )
                    .await
                    .map(|r| r.content)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap().unwrap(), format!("Echo: m{}", i));
    }
}

#[test]
fn test_plain_functions() {
    assert_eq!(e2e_custom_tool("x"), "Echo: x");
    assert_eq!(move_to_agent("x"), "Moved to x.");
    assert_eq!(move_to_location("x"), "Moved to x.");
    assert_eq!(wave_at("x"), "You waved at x.");
    assert_eq!(start_conversation("a", "b"), "Started conversation with a: b");

    let reversed = e2e_string_utils("reverse", "stressed").unwrap();
    assert_eq!(reversed, "desserts");
    assert!(matches!(
        e2e_string_utils("bogus", "x"),
        Err(ToolError::InvalidParams(_))
    ));
}

#[test]
fn test_tool_error_converts_into_top_level() {
    let err: E2eError = ToolError::NotFound("nope".into()).into();
    assert_eq!(err.to_string(), "Tool error: Tool not found: nope");
}
