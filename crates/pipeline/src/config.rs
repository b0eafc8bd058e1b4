use ingest::ChunkerConfig;
use llm::OllamaClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub chunking: ChunkerConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub enabled: bool,
    pub max_entries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            chunking: ChunkerConfig::default(),
            cache: CacheConfig {
                enabled: true,
                max_entries: 10_000,
            },
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
        }
    }
}

impl LlmConfig {
    pub fn client(&self) -> OllamaClient {
        OllamaClient::new(self.base_url.clone(), self.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_sizes() {
        let config = AppConfig::default();
        assert_eq!(config.chunking.max_chunk_size, 8000);
        assert_eq!(config.chunking.overlap, 400);
        assert!(config.cache.enabled);
    }
}
