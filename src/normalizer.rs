//! Specification flattening for execution handoff.

use ahash::AHashMap;
use serde_yaml::Value;

use crate::deserializer;
use crate::error::NormalizeError;
use crate::graph::{Node, NodeData};

/// The flattened field mapping handed to the execution collaborator.
///
/// No required-field validation happens here; rejecting an incomplete spec
/// is the executor's responsibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestSpec {
    pub fields: AHashMap<String, Value>,
}

impl TestSpec {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parses specification YAML and folds every materialized node's data into
/// one flat mapping.
pub fn normalize(yaml_text: &str) -> Result<TestSpec, NormalizeError> {
    let graph = deserializer::parse_yaml(yaml_text)?;
    flatten(&graph.nodes)
}

/// Folds node data payloads in array order; later nodes overwrite earlier
/// ones on key collision.
pub fn flatten(nodes: &[Node]) -> Result<TestSpec, NormalizeError> {
    let mut fields = AHashMap::new();
    for node in nodes {
        if let Value::Mapping(mapping) = data_value(&node.data)? {
            for (key, value) in mapping {
                if let Value::String(key) = key {
                    fields.insert(key, value);
                }
            }
        }
    }
    Ok(TestSpec { fields })
}

fn data_value(data: &NodeData) -> Result<Value, NormalizeError> {
    let value = match data {
        NodeData::Input(d) => serde_yaml::to_value(d),
        NodeData::Model(d) => serde_yaml::to_value(d),
        NodeData::System(d) => serde_yaml::to_value(d),
        NodeData::Tool(d) => serde_yaml::to_value(d),
        NodeData::Assertion(d) => serde_yaml::to_value(d),
    };
    value.map_err(|e| NormalizeError::Data(e.to_string()))
}
