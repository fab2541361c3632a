//! Index and harness configuration.

use crate::spatial::{IndexOptions, LeafFilter};
use crate::ConfigError;
use landmark::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "quadbench.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub bench: BenchConfig,
}

impl Config {
    /// Load configuration from `quadbench.toml` or use defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            info!("No {} found, creating default config", CONFIG_FILE);
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the index or the harness cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tree = &self.tree;
        if !(tree.size.is_finite() && tree.size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tree.size must be positive, got {}",
                tree.size
            )));
        }
        // Zero resolution would subdivide forever.
        if !(tree.resolution.is_finite() && tree.resolution > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tree.resolution must be positive, got {}",
                tree.resolution
            )));
        }
        if !(self.bench.search_radius.is_finite() && self.bench.search_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "bench.search_radius must be non-negative, got {}",
                self.bench.search_radius
            )));
        }
        if self.bench.landmarks == 0 {
            return Err(ConfigError::Invalid("bench.landmarks must be at least 1".to_string()));
        }
        // Landmark ids are u32.
        if u32::try_from(self.bench.landmarks).is_err() {
            return Err(ConfigError::Invalid(format!(
                "bench.landmarks must be at most {}, got {}",
                u32::MAX,
                self.bench.landmarks
            )));
        }
        Ok(())
    }
}

/// Root cell and per-tree options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TreeConfig {
    #[serde(default)]
    pub center_x: f64,
    #[serde(default)]
    pub center_y: f64,
    /// Half-width of the root cell.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Smallest cell half-size that still subdivides.
    #[serde(default = "default_resolution")]
    pub resolution: f64,
    #[serde(default = "default_strict")]
    pub strict: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub leaf_filter: LeafFilter,
}

impl TreeConfig {
    #[inline]
    pub fn center(&self) -> Position {
        Position::new(self.center_x, self.center_y)
    }

    pub fn options(&self) -> IndexOptions {
        IndexOptions {
            strict: self.strict,
            verbose: self.verbose,
            leaf_filter: self.leaf_filter,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            size: default_size(),
            resolution: default_resolution(),
            strict: default_strict(),
            verbose: false,
            leaf_filter: LeafFilter::default(),
        }
    }
}

fn default_size() -> f64 {
    1000.0
}
fn default_resolution() -> f64 {
    256.0
}
fn default_strict() -> bool {
    true
}

/// Benchmark harness settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BenchConfig {
    /// Number of random landmarks to generate.
    #[serde(default = "default_landmarks")]
    pub landmarks: usize,
    #[serde(default = "default_search_radius")]
    pub search_radius: f64,
    /// Seed for landmark and query generation.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            landmarks: default_landmarks(),
            search_radius: default_search_radius(),
            seed: default_seed(),
        }
    }
}

fn default_landmarks() -> usize {
    1000
}
fn default_search_radius() -> f64 {
    50.0
}
fn default_seed() -> u64 {
    1234
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tree.size, 1000.0);
        assert_eq!(config.tree.resolution, 256.0);
        assert_eq!(config.tree.options(), IndexOptions::default());
        assert_eq!(config.bench.landmarks, 1000);
        assert_eq!(config.bench.seed, 1234);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [tree]
            center_x = 5.0
            resolution = 16.0
            leaf_filter = "cell"
            strict = false

            [bench]
            search_radius = 12.5
            "#,
        )
        .unwrap();

        assert_eq!(config.tree.center(), Position::new(5.0, 0.0));
        assert_eq!(config.tree.size, 1000.0);
        assert_eq!(config.tree.resolution, 16.0);
        assert_eq!(config.tree.leaf_filter, LeafFilter::Cell);
        assert!(!config.tree.options().strict);
        assert_eq!(config.bench.search_radius, 12.5);
        assert_eq!(config.bench.landmarks, 1000);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_toml_str("[tree]\nresolution = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("[tree]\nsize = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("[bench]\nlandmarks = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("[tree]\nsize = \"big\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_too_many_landmarks() {
        let mut config = Config::default();
        config.bench.landmarks = u32::MAX as usize + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.bench.landmarks = u32::MAX as usize;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }
}
