use thiserror::Error;

/// Errors that can occur while parsing a specification document into a graph.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Failed to parse specification YAML: {0}")]
    InvalidYaml(String),

    #[error("Failed to parse specification JSON: {0}")]
    InvalidJson(String),
}

/// Errors that can occur while rendering a canvas graph to specification text.
#[derive(Error, Debug, Clone)]
pub enum SerializeError {
    #[error("Failed to render specification YAML: {0}")]
    YamlRender(String),
}

/// Errors that can occur while flattening a specification for execution handoff.
#[derive(Error, Debug, Clone)]
pub enum NormalizeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to encode node data fields: {0}")]
    Data(String),
}
