//! Graph → specification serialization.

use crate::error::SerializeError;
use crate::graph::{Edge, Node, NodeData};
use crate::spec::{
    Assertion, CANVAS_TAG, InputSpec, ModelConfig, TestSpecification, ToolEntry, ToolSpec,
};

/// Serializes a canvas graph into YAML test-specification text.
///
/// Edges are accepted for interface symmetry but are not consulted:
/// connectivity is implied by node type alone, and nodes fold into the
/// document in array order. The output is always syntactically valid YAML,
/// even for an empty node list.
pub fn generate_yaml(nodes: &[Node], _edges: &[Edge]) -> Result<String, SerializeError> {
    let spec = build_specification(nodes);
    serde_yaml::to_string(&spec).map_err(|e| SerializeError::YamlRender(e.to_string()))
}

/// Folds nodes into a specification document in array order.
///
/// Later nodes win on scalar collisions (two model nodes keep the last
/// model), while sequence fields append (tool duplicates are preserved).
/// Sections left empty after the fold are dropped from the document.
pub fn build_specification(nodes: &[Node]) -> TestSpecification {
    let mut spec = TestSpecification {
        tags: vec![CANVAS_TAG.to_string()],
        ..Default::default()
    };
    let mut inputs = InputSpec::default();
    let mut model_config = ModelConfig::default();
    let mut tools: Vec<ToolEntry> = Vec::new();
    let mut assertions: Vec<Assertion> = Vec::new();

    for node in nodes {
        match &node.data {
            NodeData::Input(data) => {
                if let Some(query) = &data.query {
                    inputs.query = Some(query.clone());
                }
                if let Some(system_prompt) = &data.system_prompt {
                    inputs.system_prompt = Some(system_prompt.clone());
                }
                if let Some(context) = &data.context {
                    inputs.context = Some(context.clone());
                }
                if let Some(messages) = &data.messages {
                    inputs.messages = Some(messages.clone());
                }
            }
            NodeData::Model(data) => {
                if let Some(model) = &data.model {
                    spec.model = model.clone();
                }
                if let Some(provider) = &data.provider {
                    spec.provider = Some(provider.clone());
                }
                // Convenience mirror: lives under `inputs`, not `model_config`.
                if let Some(temperature) = data.temperature {
                    inputs.temperature = Some(temperature);
                }
                if let Some(max_tokens) = data.max_tokens {
                    model_config.max_tokens = Some(max_tokens);
                }
                if let Some(top_p) = data.top_p {
                    model_config.top_p = Some(top_p);
                }
                if let Some(seed) = data.seed {
                    model_config.seed = Some(seed);
                }
            }
            NodeData::System(data) => {
                if let Some(description) = &data.description {
                    spec.description = Some(description.clone());
                }
                if let Some(timeout_ms) = data.timeout_ms {
                    spec.timeout_ms = Some(timeout_ms);
                }
                if let Some(framework) = &data.framework {
                    spec.framework = Some(framework.clone());
                }
            }
            NodeData::Tool(data) => {
                if let Some(name) = &data.tool_name {
                    let entry = if data.tool_description.is_some() || data.tool_parameters.is_some()
                    {
                        ToolEntry::Spec(ToolSpec {
                            name: name.clone(),
                            description: data.tool_description.clone(),
                            parameters: data.tool_parameters.clone(),
                        })
                    } else {
                        ToolEntry::Name(name.clone())
                    };
                    tools.push(entry);
                }
            }
            NodeData::Assertion(data) => {
                if let (Some(kind), Some(value)) = (&data.assertion_type, &data.assertion_value) {
                    assertions.push(Assertion::coerced(kind.clone(), value.clone()));
                }
            }
        }
    }

    if !inputs.is_empty() {
        spec.inputs = Some(inputs);
    }
    if !model_config.is_empty() {
        spec.model_config = Some(model_config);
    }
    if !tools.is_empty() {
        spec.tools = Some(tools);
    }
    if !assertions.is_empty() {
        spec.assertions = Some(assertions);
    }
    spec
}
