//! Graph data model. The serde renames match the JSON shape requested
//! from the generative backend, so its output parses directly into
//! these types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Central,
    Key,
    Support,
    Application,
    Bridge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeSize {
    Large,
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Primary,
    Elaborates,
    Implements,
    Causes,
    CrossLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub description: String,
    pub size: NodeSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "from")]
    pub source: String,
    #[serde(rename = "to")]
    pub target: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// A concept graph: the final product of one build request. Immutable
/// once returned; rendering and persistence happen elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMap {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Error, Debug, PartialEq)]
pub enum GraphDefect {
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("expected exactly one central node, found {0}")]
    CentralNodeCount(usize),

    #[error("edge references missing node: {0}")]
    MissingEndpoint(String),
}

impl MindMap {
    /// Referential integrity check: node ids are unique, exactly one
    /// node is central, and every edge endpoint names an existing node.
    pub fn validate(&self) -> Result<(), GraphDefect> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(GraphDefect::DuplicateNodeId(node.id.clone()));
            }
        }

        let centrals = self
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Central)
            .count();
        if centrals != 1 {
            return Err(GraphDefect::CentralNodeCount(centrals));
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphDefect::MissingEndpoint(endpoint.clone()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: NodeKind) -> Node {
        Node {
            id: id.to_string(),
            label: id.to_string(),
            kind,
            description: String::new(),
            size: NodeSize::Small,
        }
    }

    fn edge(source: &str, target: &str) -> Edge {
        Edge {
            source: source.to_string(),
            target: target.to_string(),
            label: "relates to".to_string(),
            kind: EdgeKind::Primary,
        }
    }

    #[test]
    fn wire_shape_round_trips() {
        let map = MindMap {
            nodes: vec![node("central", NodeKind::Central), node("key_1", NodeKind::Key)],
            edges: vec![edge("central", "key_1")],
        };

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains(r#""type":"central""#));
        assert!(json.contains(r#""from":"central""#));
        assert!(json.contains(r#""to":"key_1""#));

        let back: MindMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn cross_link_serializes_snake_case() {
        let json = serde_json::to_string(&EdgeKind::CrossLink).unwrap();
        assert_eq!(json, r#""cross_link""#);
    }

    #[test]
    fn validate_accepts_well_formed_graph() {
        let map = MindMap {
            nodes: vec![node("central", NodeKind::Central), node("key_1", NodeKind::Key)],
            edges: vec![edge("central", "key_1")],
        };
        assert_eq!(map.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_dangling_edges() {
        let map = MindMap {
            nodes: vec![node("central", NodeKind::Central)],
            edges: vec![edge("central", "ghost")],
        };
        assert_eq!(
            map.validate(),
            Err(GraphDefect::MissingEndpoint("ghost".to_string()))
        );
    }

    #[test]
    fn validate_requires_exactly_one_central() {
        let map = MindMap {
            nodes: vec![node("a", NodeKind::Central), node("b", NodeKind::Central)],
            edges: vec![],
        };
        assert_eq!(map.validate(), Err(GraphDefect::CentralNodeCount(2)));

        let map = MindMap {
            nodes: vec![node("a", NodeKind::Key)],
            edges: vec![],
        };
        assert_eq!(map.validate(), Err(GraphDefect::CentralNodeCount(0)));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let map = MindMap {
            nodes: vec![node("central", NodeKind::Central), node("central", NodeKind::Key)],
            edges: vec![],
        };
        assert_eq!(
            map.validate(),
            Err(GraphDefect::DuplicateNodeId("central".to_string()))
        );
    }
}
