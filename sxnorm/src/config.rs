use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a TOML file to load the configuration from.
pub const ENV_CONFIG_PATH: &str = "SXNORM_CONFIG";

/// Tuning knobs of the normalizer.
///
/// Read from the `[normalizer]` table of a TOML document; missing keys keep
/// their default.
/// ```
/// use sxnorm::config::NormalizerConfig;
///
/// let config = NormalizerConfig::from_toml_str("[normalizer]\nmax_depth = 64\n").unwrap();
/// assert_eq!(config.max_depth, 64);
/// assert!(config.bind_scopes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Deepest tree accepted before normalization fails.
    pub max_depth: usize,
    /// Run the binding phase. When false no scope is recorded.
    pub bind_scopes: bool,
    /// Workers used by [`normalize_batch`](crate::batch::normalize_batch), 0
    /// meaning the available parallelism.
    pub threads: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_depth: 4096,
            bind_scopes: true,
            threads: 0,
        }
    }
}

#[derive(Default, Deserialize)]
struct Document {
    #[serde(default)]
    normalizer: NormalizerConfig,
}

impl NormalizerConfig {
    /// Parse a TOML document. Tables other than `[normalizer]` are ignored.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Self::parse(src, "<string>")
    }

    /// Load a TOML configuration file.
    pub fn load_from_toml(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path)?;
        Self::parse(&src, &path.display().to_string())
    }

    /// Load the file named by [`ENV_CONFIG_PATH`], or the defaults if it is
    /// unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(ENV_CONFIG_PATH) {
            Some(path) => Self::load_from_toml(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn parse(src: &str, file: &str) -> Result<Self, ConfigError> {
        let document: Document = toml::from_str(src).map_err(|source| ConfigError::Parse {
            source,
            file: file.to_string(),
        })?;
        document.normalizer.validate()?;
        Ok(document.normalizer)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(())
    }

    /// Number of worker threads to use for `jobs` independent trees.
    pub fn worker_count(&self, jobs: usize) -> usize {
        let threads = match self.threads {
            0 => std::thread::available_parallelism().map_or(1, |n| n.get()),
            n => n,
        };
        threads.min(jobs).max(1)
    }
}
