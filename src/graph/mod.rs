pub mod canvas;
pub mod edge;
pub mod node;

pub use canvas::*;
pub use edge::*;
pub use node::*;

use serde::{Deserialize, Serialize};

/// A materialized canvas graph, the deserializer's output bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
