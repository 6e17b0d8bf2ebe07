use serde::{Deserialize, Serialize};

/// A directed connection between two node ids.
///
/// Edges encode pipeline order visually but carry no independent semantic
/// payload: the serializer ignores them and the deserializer synthesizes
/// them from node type adjacency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub animated: bool,
}

impl Edge {
    /// Creates an animated edge, the form every synthesized connection takes.
    pub fn animated(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            animated: true,
        }
    }
}
