use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::spec::Message;

/// A 2D canvas coordinate. Display-only; carries no specification meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A typed element on the canvas graph.
///
/// Serializes to the `{id, type, data, position}` shape used by canvas
/// state snapshots, with the `type` tag selecting the `data` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub data: NodeData,
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, data: NodeData, position: Position) -> Self {
        Self {
            id: id.into(),
            data,
            position,
        }
    }
}

/// Per-type node payload. Each variant carries only the fields meaningful
/// for its node type; absent fields fall back to documented defaults during
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeData {
    Input(InputData),
    Model(ModelData),
    System(SystemData),
    Tool(ToolData),
    Assertion(AssertionData),
}

impl NodeData {
    /// The node type tag as it appears in serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeData::Input(_) => "input",
            NodeData::Model(_) => "model",
            NodeData::System(_) => "system",
            NodeData::Tool(_) => "tool",
            NodeData::Assertion(_) => "assertion",
        }
    }
}

/// Payload of an `input` node: the query and surrounding prompt context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}

/// Payload of a `model` node: the model identifier and sampling knobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelData {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Payload of a `system` node: test-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemData {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

/// Payload of a `tool` node. Field spellings keep the camelCase used by
/// canvas state snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolData {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "toolName", default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(
        rename = "toolDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tool_description: Option<String>,
    #[serde(
        rename = "toolParameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tool_parameters: Option<Mapping>,
}

/// Payload of an `assertion` node. The expected value is free-form: a
/// string, a number, or a list of tool names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssertionData {
    #[serde(default)]
    pub label: String,
    #[serde(
        rename = "assertionType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assertion_type: Option<String>,
    #[serde(
        rename = "assertionValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assertion_value: Option<Value>,
}
