//! End-to-end round-trip, normalization and canvas state tests.
mod common;
use common::*;
use sentinel_canvas::prelude::*;

#[test]
fn round_trip_preserves_scalar_fields() {
    let doc = "\
model: claude-3-5-sonnet-20241022
inputs:
  query: What is AI?
assertions:
- must_contain: Paris
";
    let graph = parse_yaml(doc).unwrap();
    let yaml = generate_yaml(&graph.nodes, &graph.edges).unwrap();

    assert!(yaml.contains("model: claude-3-5-sonnet-20241022"));
    assert!(yaml.contains("query: What is AI?"));
    assert!(yaml.contains("must_contain: Paris"));
}

#[test]
fn round_trip_preserves_assertion_order_and_count() {
    for count in 0..=5 {
        let mut doc = String::from("model: gpt-4\n");
        if count > 0 {
            doc.push_str("assertions:\n");
            for i in 0..count {
                doc.push_str(&format!("- must_contain: value-{i}\n"));
            }
        }

        let graph = parse_yaml(&doc).unwrap();
        let yaml = generate_yaml(&graph.nodes, &graph.edges).unwrap();
        let reparsed = parse_yaml(&yaml).unwrap();

        let values: Vec<Value> = reparsed
            .nodes
            .iter()
            .filter_map(|n| match &n.data {
                NodeData::Assertion(data) => data.assertion_value.clone(),
                _ => None,
            })
            .collect();
        let expected: Vec<Value> = (0..count)
            .map(|i| Value::String(format!("value-{i}")))
            .collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn numeric_assertion_survives_a_round_trip_as_a_number() {
    let doc = "model: gpt-4\nassertions:\n- max_latency_ms: 2000\n";
    let graph = parse_yaml(doc).unwrap();
    let yaml = generate_yaml(&graph.nodes, &graph.edges).unwrap();

    assert!(yaml.contains("max_latency_ms: 2000"));
    assert!(!yaml.contains("'2000'"));
}

#[test]
fn export_import_export_reaches_a_fixed_point() {
    let doc = "\
name: Full feature test
model: claude-3-5-sonnet-20241022
provider: anthropic
description: Checks everything at once
timeout_ms: 30000
framework: langchain
inputs:
  query: What is the capital of France?
  system_prompt: Answer concisely.
model_config:
  max_tokens: 512
tools:
- browser
- name: search
  description: Web search
assertions:
- must_contain: Paris
- max_latency_ms: 2000
";
    let first = generate_yaml(&parse_yaml(doc).unwrap().nodes, &[]).unwrap();
    let second = generate_yaml(&parse_yaml(&first).unwrap().nodes, &[]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn conversation_messages_survive_a_round_trip() {
    let doc = "\
model: gpt-4
inputs:
  messages:
  - role: user
    content: hello
  - role: assistant
    content: hi there
";
    let graph = parse_yaml(doc).unwrap();
    let yaml = generate_yaml(&graph.nodes, &graph.edges).unwrap();

    assert!(yaml.contains("messages:"));
    assert!(yaml.contains("role: user"));
    assert!(yaml.contains("content: hi there"));

    let reparsed = parse_yaml(&yaml).unwrap();
    let NodeData::Input(data) = &reparsed.nodes[0].data else {
        panic!("expected an input node");
    };
    assert_eq!(data.messages.as_ref().unwrap().len(), 2);
}

#[test]
fn round_trip_keeps_system_metadata() {
    let nodes = vec![
        system_node("1", "Metadata check", 15000, "crewai"),
        model_node("2", "gpt-4"),
    ];
    let yaml = generate_yaml(&nodes, &[]).unwrap();
    let graph = parse_yaml(&yaml).unwrap();

    let NodeData::System(data) = &graph.nodes[0].data else {
        panic!("expected a system node");
    };
    assert_eq!(data.description.as_deref(), Some("Metadata check"));
    assert_eq!(data.timeout_ms, Some(15000));
    assert_eq!(data.framework.as_deref(), Some("crewai"));
}

#[test]
fn extended_tool_form_survives_a_round_trip() {
    let nodes = vec![tool_node_extended("1", "search", "Web search")];
    let yaml = generate_yaml(&nodes, &[]).unwrap();
    let graph = parse_yaml(&yaml).unwrap();
    let again = generate_yaml(&graph.nodes, &graph.edges).unwrap();

    assert!(again.contains("name: search"));
    assert!(again.contains("description: Web search"));
}

#[test]
fn normalize_flattens_node_payloads() {
    let doc = "\
model: gpt-4
inputs:
  query: What is AI?
assertions:
- must_contain: Paris
";
    let spec = normalize(doc).unwrap();

    assert_eq!(
        spec.get("query"),
        Some(&Value::String("What is AI?".to_string()))
    );
    assert_eq!(spec.get("model"), Some(&Value::String("gpt-4".to_string())));
    assert_eq!(
        spec.get("assertionType"),
        Some(&Value::String("must_contain".to_string()))
    );
    assert_eq!(
        spec.get("assertionValue"),
        Some(&Value::String("Paris".to_string()))
    );
}

#[test]
fn normalize_later_nodes_win_on_collision() {
    // Every payload carries a `label`; the fold keeps the last one.
    let nodes = vec![input_node("1", "hello"), model_node("2", "gpt-4")];
    let spec = sentinel_canvas::normalizer::flatten(&nodes).unwrap();

    assert_eq!(
        spec.get("label"),
        Some(&Value::String("Model: gpt-4".to_string()))
    );
}

#[test]
fn normalize_propagates_parse_errors() {
    assert!(normalize("invalid: yaml: content:").is_err());
}

#[test]
fn sample_canvas_exports_the_documented_defaults() {
    let canvas = Canvas::sample();
    let yaml = canvas.to_yaml().unwrap();

    assert!(yaml.contains("query: What is the capital of France?"));
    assert!(yaml.contains("model: gpt-4"));
    assert!(yaml.contains("temperature: 0.7"));
    assert!(yaml.contains("must_contain: Paris"));
}

#[test]
fn removing_a_node_drops_its_edges() {
    let mut canvas = Canvas::sample();
    canvas.remove_node("2");

    assert_eq!(canvas.nodes.len(), 2);
    assert!(canvas.edges.is_empty());
}

#[test]
fn update_node_merges_into_existing_data() {
    let mut canvas = Canvas::sample();
    canvas.update_node("1", |data| {
        if let NodeData::Input(input) = data {
            input.query = Some("What is the capital of Spain?".to_string());
        }
    });

    let yaml = canvas.to_yaml().unwrap();
    assert!(yaml.contains("query: What is the capital of Spain?"));
}

#[test]
fn connect_adds_an_animated_edge() {
    let mut canvas = Canvas::sample();
    canvas.connect("1", "3");

    let edge = canvas.edges.last().unwrap();
    assert_eq!(edge.source, "1");
    assert_eq!(edge.target, "3");
    assert!(edge.animated);
}

#[test]
fn node_json_shape_matches_canvas_state_snapshots() {
    let node = input_node("1", "hello");
    assert_eq!(node.data.kind(), "input");

    let json = serde_json::to_string(&node).unwrap();
    assert!(json.contains("\"type\":\"input\""));
    assert!(json.contains("\"data\":{"));

    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn import_replaces_the_whole_graph() {
    let mut canvas = Canvas::sample();
    let graph = parse_yaml("model: gpt-4o\n").unwrap();
    canvas.load_graph(graph);

    assert_eq!(canvas.nodes.len(), 1);
    assert_eq!(canvas.nodes[0].id, "model-1");
    assert!(canvas.edges.is_empty());
}
