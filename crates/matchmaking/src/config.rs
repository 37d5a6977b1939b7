//! Matchmaking configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LoadError, MatchmakingError, Result};
use crate::matchmaker::Method;
use crate::tabu::TabuSearch;
use crate::variety::DEFAULT_TOLERANCE;

/// Matchmaking configuration
///
/// ```toml
/// method = "fair"
/// seed = 42
/// quite_fair_k = 2
/// variety_tolerance = 0.05
///
/// [search]
/// k = 1
/// max_iter = 5000
/// tabu_size = 20
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakingConfig {
    /// Method used when none is requested explicitly
    pub method: Method,
    /// Fixed seed for reproducible matchmaking (None = fresh entropy)
    pub seed: Option<u64>,
    /// Number of candidate team sets `quite_fair` picks from
    pub quite_fair_k: usize,
    /// Quality margin within which 2v2 splits count as equally fair
    pub variety_tolerance: f64,
    /// Tabu search parameters
    pub search: TabuSearch,
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            method: Method::Fair,
            seed: None,
            quite_fair_k: 2,
            variety_tolerance: DEFAULT_TOLERANCE,
            search: TabuSearch::default(),
        }
    }
}

impl MatchmakingConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, LoadError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        if self.quite_fair_k < 1 {
            return Err(MatchmakingError::NoSolutionsRequested);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = MatchmakingConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatchmakingConfig::default());
        assert_eq!(config.search, TabuSearch::new(1, 5000, 20));
    }

    #[test]
    fn test_parse_full_config() {
        let config = MatchmakingConfig::from_toml_str(
            r#"
            method = "quite_fair"
            seed = 42
            quite_fair_k = 3
            variety_tolerance = 0.1

            [search]
            max_iter = 800
            tabu_size = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.method, Method::QuiteFair);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.quite_fair_k, 3);
        assert_eq!(config.variety_tolerance, 0.1);
        assert_eq!(config.search, TabuSearch::new(1, 800, 10));
    }

    #[test]
    fn test_rejects_invalid_search() {
        let err = MatchmakingConfig::from_toml_str("[search]\ntabu_size = 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(MatchmakingError::EmptyTabuWindow)
        ));
    }

    #[test]
    fn test_rejects_unknown_method() {
        let err = MatchmakingConfig::from_toml_str("method = \"best\"\n").unwrap_err();
        assert!(matches!(err, LoadError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MatchmakingConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
