use std::path::PathBuf;

use bevy_ecs::resource::Resource;
use serde::Deserialize;

/// Settings for an economy world. Every field has a default, so `{}` is a
/// valid configuration document.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub seed: u64,
    pub start_day: u32,
    /// Days between journal flushes. Zero disables periodic flushing.
    pub flush_interval_days: u32,
    /// Where JSONL output goes. `None` keeps the journal in memory only.
    pub output_dir: Option<PathBuf>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_day: 0,
            flush_interval_days: 30,
            output_dir: None,
        }
    }
}

impl EconomyConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EconomyConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EconomyConfig::default());
        assert_eq!(config.seed, 42);
        assert_eq!(config.flush_interval_days, 30);
    }

    #[test]
    fn partial_document_overrides() {
        let config =
            EconomyConfig::from_json_str(r#"{"seed": 7, "output_dir": "out/econ"}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.start_day, 0);
        assert_eq!(config.output_dir, Some(PathBuf::from("out/econ")));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(EconomyConfig::from_json_str(r#"{"seed": "many"}"#).is_err());
    }
}
