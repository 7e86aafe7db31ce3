use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How much each signal contributes to a user's style profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileWeights {
    pub quiz: f32,
    pub owned: f32,
    pub liked: f32,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            quiz: 0.7,
            owned: 0.5,
            liked: 0.3,
        }
    }
}

/// Recommendation defaults, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: ProfileWeights,
    pub people_k: usize,
    /// Relevance floor for people suggestions
    pub people_min_similarity: f32,
    pub exclude_followed: bool,
    pub listings_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ProfileWeights::default(),
            people_k: 5,
            people_min_similarity: 0.0,
            exclude_followed: true,
            listings_k: 10,
        }
    }
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: EngineConfig =
            serde_json::from_str(&raw).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [("quiz", w.quiz), ("owned", w.owned), ("liked", w.liked)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "weight {name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.people_min_similarity.is_finite() {
            return Err(Error::InvalidConfig(
                "people_min_similarity must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
