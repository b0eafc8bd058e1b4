//! Concept-graph construction: a generative mind-map attempt with a
//! deterministic heuristic fallback that always yields a well-formed
//! graph.

pub mod builder;
pub mod concepts;
pub mod prompt;
pub mod schema;

pub use builder::{GraphBuilder, heuristic_mind_map};
pub use concepts::{
    Application, Concept, ConceptKind, SupportingConcept, extract_concepts, main_topic,
};
pub use schema::{Edge, EdgeKind, GraphDefect, MindMap, Node, NodeKind, NodeSize};
