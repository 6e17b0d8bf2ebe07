use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use super::Assertion;

/// Name given to specifications exported from the canvas.
pub const DEFAULT_TEST_NAME: &str = "Test from Canvas";

/// Model identifier used when no model node supplies one.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Sampling temperature used when the document carries none.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Tag attached to every canvas-exported specification.
pub const CANVAS_TAG: &str = "canvas-generated";

/// The YAML test-specification document.
///
/// Struct field order is YAML emission order. `name` and `model` fall back
/// to their defaults on deserialization so partial documents always parse;
/// empty optional collections are dropped on serialization to keep exports
/// minimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSpecification {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Accepted at the top level for older documents; exports keep the
    /// seed under `model_config`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<InputSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_config: Option<ModelConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertions: Option<Vec<Assertion>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

fn default_name() -> String {
    DEFAULT_TEST_NAME.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for TestSpecification {
    fn default() -> Self {
        Self {
            name: default_name(),
            model: default_model(),
            provider: None,
            seed: None,
            inputs: None,
            model_config: None,
            tools: None,
            assertions: None,
            tags: Vec::new(),
            description: None,
            timeout_ms: None,
            framework: None,
        }
    }
}

/// The `inputs` section: query, prompt context and the temperature
/// convenience mirror.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}

impl InputSpec {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.system_prompt.is_none()
            && self.temperature.is_none()
            && self.context.is_none()
            && self.messages.is_none()
    }
}

/// A single conversation turn inside `inputs.messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// The `model_config` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

impl ModelConfig {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.max_tokens.is_none()
            && self.top_p.is_none()
            && self.top_k.is_none()
            && self.seed.is_none()
            && self.stop_sequences.is_none()
    }
}

/// One entry of the `tools` sequence: either a bare tool name or the
/// extended object form. The variant is chosen by the presence of a
/// description or parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolEntry {
    Name(String),
    Spec(ToolSpec),
}

/// The extended `{name, description, parameters}` tool form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Mapping>,
}
