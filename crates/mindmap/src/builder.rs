use anyhow::{Context, Result, bail};
use llm::CompletionClient;
use tracing::{debug, warn};

use crate::concepts::{self, Concept, ConceptKind};
use crate::prompt;
use crate::schema::{Edge, EdgeKind, MindMap, Node, NodeKind, NodeSize};

/// Keywords indicating a cross-cutting theme, scanned in this order.
const BRIDGE_KEYWORDS: &[&str] = &[
    "integration",
    "combination",
    "synthesis",
    "relationship",
    "interaction",
    "correlation",
];

/// Builds the concept graph for a summary.
///
/// The generative path is attempted first; anything wrong with it — a
/// backend error, unparseable JSON, missing nodes or edges, broken
/// references — silently drops to the deterministic heuristic assembly.
/// Building never fails.
pub struct GraphBuilder<C> {
    client: C,
}

impl<C: CompletionClient> GraphBuilder<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn build(&self, summary_text: &str) -> MindMap {
        match self.generate(summary_text).await {
            Ok(map) => {
                debug!(nodes = map.nodes.len(), edges = map.edges.len(), "generative mind map accepted");
                map
            }
            Err(e) => {
                warn!(error = %e, "generative mind map rejected, using heuristic assembly");
                heuristic_mind_map(summary_text)
            }
        }
    }

    async fn generate(&self, summary_text: &str) -> Result<MindMap> {
        let prompt = prompt::build_mind_map_prompt(summary_text);
        let response = self
            .client
            .complete(prompt::MIND_MAP_SYSTEM, &prompt)
            .await
            .context("requesting mind map")?;

        let map: MindMap =
            serde_json::from_str(response.trim()).context("parsing mind map JSON")?;

        if map.nodes.is_empty() || map.edges.is_empty() {
            bail!("mind map is missing nodes or edges");
        }
        map.validate().context("checking mind map integrity")?;

        Ok(map)
    }
}

/// Deterministic graph assembly from the concept extractor's output.
/// Total: any summary text, including empty, yields a well-formed graph.
pub fn heuristic_mind_map(summary_text: &str) -> MindMap {
    let mut nodes = vec![Node {
        id: "central".to_string(),
        label: concepts::main_topic(summary_text),
        kind: NodeKind::Central,
        description: "Core concept that everything connects to".to_string(),
        size: NodeSize::Large,
    }];
    let mut edges = Vec::new();

    let extracted = concepts::extract_concepts(summary_text);
    // Only the first 4 concepts become top-level branches.
    let branches: Vec<&Concept> = extracted.iter().take(4).collect();

    for (i, concept) in branches.iter().enumerate() {
        let key = key_id(i);
        nodes.push(Node {
            id: key.clone(),
            label: concept.title.clone(),
            kind: NodeKind::Key,
            description: concept.description.clone(),
            size: NodeSize::Medium,
        });
        edges.push(Edge {
            source: "central".to_string(),
            target: key.clone(),
            label: concept.relationship.to_string(),
            kind: EdgeKind::Primary,
        });

        for (j, support) in concept.supports.iter().take(2).enumerate() {
            let sid = support_id(i, j);
            nodes.push(Node {
                id: sid.clone(),
                label: support.title.clone(),
                kind: NodeKind::Support,
                description: support.explanation.clone(),
                size: NodeSize::Small,
            });
            edges.push(Edge {
                source: key.clone(),
                target: sid.clone(),
                label: support.connection.clone(),
                kind: EdgeKind::Elaborates,
            });

            if let Some(app) = &support.application {
                let aid = application_id(i, j);
                nodes.push(Node {
                    id: aid.clone(),
                    label: app.title.clone(),
                    kind: NodeKind::Application,
                    description: app.description.clone(),
                    size: NodeSize::Small,
                });
                edges.push(Edge {
                    source: sid.clone(),
                    target: aid,
                    label: "applied as".to_string(),
                    kind: EdgeKind::Implements,
                });
            }
        }
    }

    add_cross_links(&branches, &mut edges);
    add_bridge_node(summary_text, branches.len(), &mut nodes, &mut edges);

    MindMap { nodes, edges }
}

/// Connect compatible branches: each of the first 3 paired against the
/// later branches among the first 4.
fn add_cross_links(branches: &[&Concept], edges: &mut Vec<Edge>) {
    for i in 0..branches.len().min(3) {
        for j in (i + 1)..branches.len().min(4) {
            if should_cross_link(branches[i], branches[j]) {
                edges.push(Edge {
                    source: key_id(i),
                    target: key_id(j),
                    label: cross_link_label(branches[i], branches[j]).to_string(),
                    kind: EdgeKind::CrossLink,
                });
            }
        }
    }
}

fn should_cross_link(a: &Concept, b: &Concept) -> bool {
    matches!(a.kind, ConceptKind::Process | ConceptKind::Causal)
        && matches!(b.kind, ConceptKind::Outcome | ConceptKind::Structural)
        || a.kind == ConceptKind::Structural && b.kind == ConceptKind::Process
        || a.description.to_lowercase().contains("benefit")
            && b.description.to_lowercase().contains("process")
}

fn cross_link_label(a: &Concept, b: &Concept) -> &'static str {
    if a.kind == ConceptKind::Process && b.kind == ConceptKind::Outcome {
        "produces"
    } else if a.kind == ConceptKind::Causal && b.kind == ConceptKind::Structural {
        "influences"
    } else if a.description.to_lowercase().contains("benefit") {
        "enables"
    } else {
        "connects with"
    }
}

/// At most one bridge node per graph: the first keyword found wins,
/// scanning the keyword list in order.
fn add_bridge_node(
    summary_text: &str,
    branch_count: usize,
    nodes: &mut Vec<Node>,
    edges: &mut Vec<Edge>,
) {
    let lower = summary_text.to_lowercase();
    let Some(keyword) = BRIDGE_KEYWORDS.iter().find(|k| lower.contains(*k)) else {
        return;
    };

    let bridge = format!("bridge_{keyword}");
    nodes.push(Node {
        id: bridge.clone(),
        label: format!("{} Point", concepts::title_case(keyword)),
        kind: NodeKind::Bridge,
        description: format!("Connects different concepts through {keyword}"),
        size: NodeSize::Small,
    });

    for i in 0..branch_count.min(2) {
        edges.push(Edge {
            source: key_id(i),
            target: bridge.clone(),
            label: "bridges to".to_string(),
            kind: EdgeKind::CrossLink,
        });
    }
}

// Positional id scheme; keeps every id unique within one graph and the
// whole assembly reproducible.

fn key_id(branch: usize) -> String {
    format!("key_{}", branch + 1)
}

fn support_id(branch: usize, support: usize) -> String {
    format!("support_{}_{}", branch + 1, support + 1)
}

fn application_id(branch: usize, support: usize) -> String {
    format!("app_{}_{}", branch + 1, support + 1)
}
