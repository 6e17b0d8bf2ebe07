//! Specification → graph materialization.

use crate::error::ParseError;
use crate::graph::{
    AssertionData, Edge, Graph, InputData, ModelData, Node, NodeData, Position, SystemData,
    ToolData,
};
use crate::spec::{DEFAULT_TEMPERATURE, TestSpecification, ToolEntry};

const LAYOUT_X: f64 = 250.0;
const LAYOUT_Y_START: f64 = 100.0;
const LAYOUT_SPACING: f64 = 180.0;
const TOOL_X_OFFSET: f64 = 300.0;

/// Parses YAML test-specification text and materializes a canvas graph.
///
/// Syntax errors and non-mapping documents propagate as [`ParseError`];
/// callers rely on catching them to surface validation messages. A
/// successfully parsed document always yields at least the mandatory model
/// node; a sparse result is the caller's signal to inspect, not an error.
pub fn parse_yaml(text: &str) -> Result<Graph, ParseError> {
    let spec: TestSpecification =
        serde_yaml::from_str(text).map_err(|e| ParseError::InvalidYaml(e.to_string()))?;
    Ok(materialize(&spec))
}

/// Parses the JSON rendering of a specification document. Same
/// materialization as [`parse_yaml`].
pub fn parse_json(text: &str) -> Result<Graph, ParseError> {
    let spec: TestSpecification =
        serde_json::from_str(text).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    Ok(materialize(&spec))
}

/// Materializes nodes in canonical order (system, input, model, tools,
/// assertions) under a vertical layout cursor. Ids and positions are a pure
/// function of document structure, never of content or a clock.
pub fn materialize(spec: &TestSpecification) -> Graph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut y = LAYOUT_Y_START;

    if spec.description.is_some() || spec.timeout_ms.is_some() || spec.framework.is_some() {
        nodes.push(Node::new(
            "system-1",
            NodeData::System(SystemData {
                label: "System Config".to_string(),
                description: spec.description.clone(),
                timeout_ms: spec.timeout_ms,
                framework: spec.framework.clone(),
            }),
            Position::new(LAYOUT_X, y),
        ));
        y += LAYOUT_SPACING;
    }

    let inputs = spec.inputs.clone().unwrap_or_default();
    let has_input = inputs.query.is_some()
        || inputs.system_prompt.is_some()
        || inputs.context.is_some()
        || inputs.messages.is_some();
    if has_input {
        nodes.push(Node::new(
            "input-1",
            NodeData::Input(InputData {
                label: "Input".to_string(),
                query: inputs.query.clone(),
                system_prompt: inputs.system_prompt.clone(),
                context: inputs.context.clone(),
                messages: inputs.messages.clone(),
            }),
            Position::new(LAYOUT_X, y),
        ));
        y += LAYOUT_SPACING;
    }

    // The model node is mandatory; `model_config` wins over the `inputs`
    // temperature mirror when both are present.
    let config = spec.model_config.clone().unwrap_or_default();
    let temperature = config
        .temperature
        .or(inputs.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);
    nodes.push(Node::new(
        "model-1",
        NodeData::Model(ModelData {
            label: format!("Model: {}", spec.model),
            model: Some(spec.model.clone()),
            provider: spec.provider.clone(),
            temperature: Some(temperature),
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            // Older documents carried `seed` at the top level.
            seed: config.seed.or(spec.seed),
        }),
        Position::new(LAYOUT_X, y),
    ));
    if has_input {
        edges.push(Edge::animated("e-input-model", "input-1", "model-1"));
    }
    y += LAYOUT_SPACING;

    if let Some(tools) = &spec.tools {
        for (index, tool) in tools.iter().enumerate() {
            let data = match tool {
                ToolEntry::Name(name) => ToolData {
                    label: "Tool".to_string(),
                    tool_name: Some(name.clone()),
                    ..Default::default()
                },
                ToolEntry::Spec(tool_spec) => ToolData {
                    label: "Tool".to_string(),
                    tool_name: Some(tool_spec.name.clone()),
                    tool_description: tool_spec.description.clone(),
                    tool_parameters: tool_spec.parameters.clone(),
                },
            };
            let id = format!("tool-{}", index + 1);
            nodes.push(Node::new(
                id.clone(),
                NodeData::Tool(data),
                Position::new(LAYOUT_X + TOOL_X_OFFSET, y),
            ));
            edges.push(Edge::animated(
                format!("e-model-tool-{}", index + 1),
                "model-1",
                id,
            ));
            y += LAYOUT_SPACING / 2.0;
        }
        if !tools.is_empty() {
            y += LAYOUT_SPACING / 2.0;
        }
    }

    if let Some(assertions) = &spec.assertions {
        for (index, assertion) in assertions.iter().enumerate() {
            let id = format!("assertion-{}", index + 1);
            nodes.push(Node::new(
                id.clone(),
                NodeData::Assertion(AssertionData {
                    label: "Assertion".to_string(),
                    assertion_type: Some(assertion.kind.clone()),
                    assertion_value: Some(assertion.expected.clone()),
                }),
                Position::new(LAYOUT_X, y),
            ));
            edges.push(Edge::animated(
                format!("e-model-assertion-{}", index + 1),
                "model-1",
                id,
            ));
            y += LAYOUT_SPACING;
        }
    }

    Graph { nodes, edges }
}
