//! Common test utilities for building canvas graphs and specification text.
use sentinel_canvas::prelude::*;

/// Creates an `input` node carrying a query.
#[allow(dead_code)]
pub fn input_node(id: &str, query: &str) -> Node {
    Node::new(
        id,
        NodeData::Input(InputData {
            label: "Input".to_string(),
            query: Some(query.to_string()),
            ..Default::default()
        }),
        Position::new(100.0, 100.0),
    )
}

/// Creates a `model` node with only the model identifier set.
#[allow(dead_code)]
pub fn model_node(id: &str, model: &str) -> Node {
    Node::new(
        id,
        NodeData::Model(ModelData {
            label: format!("Model: {model}"),
            model: Some(model.to_string()),
            ..Default::default()
        }),
        Position::new(100.0, 300.0),
    )
}

/// Creates an `assertion` node from a kind and a raw canvas value.
#[allow(dead_code)]
pub fn assertion_node(id: &str, kind: &str, value: Value) -> Node {
    Node::new(
        id,
        NodeData::Assertion(AssertionData {
            label: "Assertion".to_string(),
            assertion_type: Some(kind.to_string()),
            assertion_value: Some(value),
        }),
        Position::new(100.0, 500.0),
    )
}

/// Creates a `tool` node in the bare-name form.
#[allow(dead_code)]
pub fn tool_node(id: &str, name: &str) -> Node {
    Node::new(
        id,
        NodeData::Tool(ToolData {
            label: "Tool".to_string(),
            tool_name: Some(name.to_string()),
            ..Default::default()
        }),
        Position::new(400.0, 300.0),
    )
}

/// Creates a `tool` node carrying a description, forcing the extended form.
#[allow(dead_code)]
pub fn tool_node_extended(id: &str, name: &str, description: &str) -> Node {
    Node::new(
        id,
        NodeData::Tool(ToolData {
            label: "Tool".to_string(),
            tool_name: Some(name.to_string()),
            tool_description: Some(description.to_string()),
            ..Default::default()
        }),
        Position::new(400.0, 300.0),
    )
}

/// Creates a `system` node carrying test-level metadata.
#[allow(dead_code)]
pub fn system_node(id: &str, description: &str, timeout_ms: u64, framework: &str) -> Node {
    Node::new(
        id,
        NodeData::System(SystemData {
            label: "System Config".to_string(),
            description: Some(description.to_string()),
            timeout_ms: Some(timeout_ms),
            framework: Some(framework.to_string()),
        }),
        Position::new(100.0, 100.0),
    )
}
