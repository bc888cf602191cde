use giftrec_core::{Error, Result, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Number of results returned by `recommend_default`
    pub default_k: usize,
    /// Report scores clamped to [0, 1]. Ranking always uses the raw similarity.
    pub clamp_scores: bool,
    /// Encode the query's popularity at the fitted catalog mean instead of the
    /// survey's fixed value, so popularity does not pull the ranking.
    pub neutral_query_popularity: bool,
    /// Catalog size at which query scoring runs in parallel
    pub parallel_threshold: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_k: 10,
            clamp_scores: true,
            neutral_query_popularity: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::InvalidConfig(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a JSON config file; missing keys take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.default_k, 10);
        assert!(config.clamp_scores);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_parallel_threshold_rejected() {
        let config = ServiceConfig {
            parallel_threshold: 0,
            ..ServiceConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"default_k": 3, "clamp_scores": false}"#).unwrap();

        let config = ServiceConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.default_k, 3);
        assert!(!config.clamp_scores);
        assert!(config.neutral_query_popularity);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }
}
