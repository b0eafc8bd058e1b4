use dashmap::DashMap;
use mindmap::MindMap;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Request-level result cache: identical input text maps to the same
/// summary or graph, so repeat requests skip the generative backend.
pub struct ResponseCache {
    summaries: Arc<DashMap<String, String>>,
    graphs: Arc<DashMap<String, MindMap>>,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            summaries: Arc::new(DashMap::new()),
            graphs: Arc::new(DashMap::new()),
            max_entries,
        }
    }

    pub fn get_summary(&self, document_text: &str) -> Option<String> {
        let key = hash_text(document_text);
        self.summaries.get(&key).map(|r| r.value().clone())
    }

    pub fn set_summary(&self, document_text: &str, summary: String) {
        evict_if_full(&self.summaries, self.max_entries);
        self.summaries.insert(hash_text(document_text), summary);
    }

    pub fn get_graph(&self, summary_text: &str) -> Option<MindMap> {
        let key = hash_text(summary_text);
        self.graphs.get(&key).map(|r| r.value().clone())
    }

    pub fn set_graph(&self, summary_text: &str, graph: MindMap) {
        evict_if_full(&self.graphs, self.max_entries);
        self.graphs.insert(hash_text(summary_text), graph);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            summaries_cached: self.summaries.len(),
            graphs_cached: self.graphs.len(),
        }
    }

    pub fn clear(&self) {
        self.summaries.clear();
        self.graphs.clear();
    }
}

/// Simple eviction: clear 25% when full.
fn evict_if_full<V>(map: &DashMap<String, V>, max_entries: usize) {
    if map.len() >= max_entries {
        let to_remove: Vec<_> = map
            .iter()
            .take(max_entries / 4)
            .map(|r| r.key().clone())
            .collect();
        for key in to_remove {
            map.remove(&key);
        }
    }
}

fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, serde::Serialize)]
pub struct CacheStats {
    pub summaries_cached: usize,
    pub graphs_cached: usize,
}
