//! Configuration file model.
//!
//! ```toml
//! [generation]
//! model = "o3-mini"
//! base_url = "https://api.openai.com/v1"
//! request_timeout_secs = 120
//!
//! [research]
//! breadth = 4
//! depth = 2
//! ```
//!
//! Every field is optional; anything absent falls back to the CLI prompt
//! (research parameters) or the built-in defaults (generation parameters).
//! The API key is never read from a file — only from `OPENAI_API_KEY`.

use serde::{Deserialize, Serialize};

/// Root configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub generation: FileGenerationConfig,
    pub research: FileResearchConfig,
}

/// `[generation]` section — generation service settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model id (overridden by `--model` and `OPENAI_MODEL`).
    pub model: Option<String>,
    /// Endpoint base URL (overridden by `OPENAI_BASE_URL`).
    pub base_url: Option<String>,
    /// Upper bound on the request duration. Unset means the session waits
    /// on the service indefinitely.
    pub request_timeout_secs: Option<u64>,
}

/// `[research]` section — session parameter pinning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResearchConfig {
    /// Pin the breadth, skipping the interactive prompt.
    pub breadth: Option<usize>,
    /// Pin the depth, skipping the interactive prompt.
    pub depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_unset() {
        let config = FileConfig::default();
        assert!(config.generation.model.is_none());
        assert!(config.generation.base_url.is_none());
        assert!(config.generation.request_timeout_secs.is_none());
        assert!(config.research.breadth.is_none());
        assert!(config.research.depth.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [generation]
            model = "gpt-4o-mini"

            [research]
            breadth = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.generation.model.as_deref(), Some("gpt-4o-mini"));
        assert!(config.generation.base_url.is_none());
        assert_eq!(config.research.breadth, Some(6));
        assert!(config.research.depth.is_none());
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.generation.model.is_none());
    }
}
