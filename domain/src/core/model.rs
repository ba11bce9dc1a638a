//! Model value object representing a generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available generation models (Value Object)
///
/// This is a domain concept representing the models that can serve a
/// follow-up generation request. Reasoning models (the o-series) take a
/// reasoning-effort hint instead of a sampling temperature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // o-series reasoning models
    O3Mini,
    O3,
    O4Mini,
    // GPT sampling models
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::O3Mini => "o3-mini",
            Model::O3 => "o3",
            Model::O4Mini => "o4-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a reasoning model (takes `reasoning_effort`, no
    /// sampling temperature)
    pub fn is_reasoning(&self) -> bool {
        match self {
            Model::O3Mini | Model::O3 | Model::O4Mini => true,
            Model::Custom(s) => s.starts_with('o'),
            _ => false,
        }
    }
}

impl Default for Model {
    /// Returns the default model (o3-mini)
    fn default() -> Self {
        Model::O3Mini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "o3-mini" => Model::O3Mini,
            "o3" => Model::O3,
            "o4-mini" => Model::O4Mini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4.1" => Model::Gpt41,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::O3Mini, Model::Gpt4o, Model::Gpt41] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "llama-3.3-70b".parse().unwrap();
        assert_eq!(model, Model::Custom("llama-3.3-70b".to_string()));
        assert_eq!(model.to_string(), "llama-3.3-70b");
    }

    #[test]
    fn test_reasoning_detection() {
        assert!(Model::O3Mini.is_reasoning());
        assert!(Model::O4Mini.is_reasoning());
        assert!(!Model::Gpt4o.is_reasoning());
        // Custom o-prefixed ids count as reasoning models
        assert!(Model::Custom("o1-preview".to_string()).is_reasoning());
        assert!(!Model::Custom("gpt-oss".to_string()).is_reasoning());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::O3Mini);
    }
}
