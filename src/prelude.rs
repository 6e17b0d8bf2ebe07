//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! sentinel-canvas crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use sentinel_canvas::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let canvas = Canvas::sample();
//! let yaml = canvas.to_yaml()?;
//! let graph = parse_yaml(&yaml)?;
//! assert!(!graph.nodes.is_empty());
//! # Ok(())
//! # }
//! ```

// Conversion operations
pub use crate::deserializer::{parse_json, parse_yaml};
pub use crate::normalizer::{TestSpec, normalize};
pub use crate::serializer::generate_yaml;

// Graph types
pub use crate::graph::{
    AssertionData, Canvas, Edge, Graph, InputData, ModelData, Node, NodeData, Position, SystemData,
    ToolData,
};

// Specification document types
pub use crate::spec::{
    Assertion, InputSpec, Message, ModelConfig, TestSpecification, ToolEntry, ToolSpec,
};

// Error types
pub use crate::error::{NormalizeError, ParseError, SerializeError};

// Payload value type commonly used with node data
pub use serde_yaml::Value;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
