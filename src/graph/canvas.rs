use serde_yaml::Value;

use super::{AssertionData, Edge, Graph, InputData, ModelData, Node, NodeData, Position};
use crate::error::SerializeError;
use crate::serializer;

/// Explicit canvas state: the node and edge lists behind the editor surface.
///
/// Graphs are replaced wholesale on "New", "Import" and "Load Template";
/// there is no incremental diffing. The conversion functions themselves stay
/// pure; this struct only owns the lists and the small mutations the editor
/// performs on them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed graph shown on a fresh canvas: one input, one model and one
    /// assertion wired input → model → assertion.
    pub fn sample() -> Self {
        let nodes = vec![
            Node::new(
                "1",
                NodeData::Input(InputData {
                    label: "Input Node".to_string(),
                    query: Some("What is the capital of France?".to_string()),
                    ..Default::default()
                }),
                Position::new(100.0, 100.0),
            ),
            Node::new(
                "2",
                NodeData::Model(ModelData {
                    label: "Model: GPT-4".to_string(),
                    model: Some("gpt-4".to_string()),
                    temperature: Some(0.7),
                    ..Default::default()
                }),
                Position::new(100.0, 300.0),
            ),
            Node::new(
                "3",
                NodeData::Assertion(AssertionData {
                    label: "Assertion".to_string(),
                    assertion_type: Some("must_contain".to_string()),
                    assertion_value: Some(Value::String("Paris".to_string())),
                }),
                Position::new(100.0, 500.0),
            ),
        ];
        let edges = vec![
            Edge::animated("e1-2", "1", "2"),
            Edge::animated("e2-3", "2", "3"),
        ];
        Self { nodes, edges }
    }

    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, node_id: &str) {
        self.nodes.retain(|n| n.id != node_id);
        self.edges
            .retain(|e| e.source != node_id && e.target != node_id);
    }

    /// Applies an in-place update to the data of the node with the given id.
    pub fn update_node(&mut self, node_id: &str, update: impl FnOnce(&mut NodeData)) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            update(&mut node.data);
        }
    }

    /// Adds an animated edge between two nodes.
    pub fn connect(&mut self, source: &str, target: &str) {
        self.edges
            .push(Edge::animated(format!("e-{source}-{target}"), source, target));
    }

    /// Replaces the whole graph, e.g. after an import.
    pub fn load_graph(&mut self, graph: Graph) {
        self.nodes = graph.nodes;
        self.edges = graph.edges;
    }

    /// Renders the current graph as YAML test-specification text.
    pub fn to_yaml(&self) -> Result<String, SerializeError> {
        serializer::generate_yaml(&self.nodes, &self.edges)
    }
}
