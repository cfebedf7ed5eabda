use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Deserializer};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{FinderError, FinderResult};
use crate::partition::PartitionStrategy;

/// Configuration for a compound-word search run.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of
/// precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.wordscout.yaml` in the current directory
/// 3. Global `$HOME/.config/wordscout/config.yaml`
///
/// # Configuration Format
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Worker thread count (default: CPU cores)
/// thread_count: 4
///
/// # How the word list is split across workers: "range" or "step"
/// strategy: step
///
/// # Upper bound on how long to wait for workers
/// worker_timeout: "1h"
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// When using the CLI, command-line arguments take precedence over config
/// file values; the merging behavior is defined in `merge_with_cli`.
#[derive(Debug, Clone, Deserialize)]
pub struct FinderConfig {
    /// Number of worker threads (one work unit each).
    /// Defaults to the number of CPU cores if not specified.
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// How the word list is divided among workers.
    #[serde(default)]
    pub strategy: PartitionStrategy,

    /// Upper bound on how long the coordinator waits for workers. Workers
    /// still running when it elapses are dropped from the tally with a
    /// warning. Accepts humantime strings such as "30s" or "1h".
    #[serde(
        default = "default_worker_timeout",
        deserialize_with = "deserialize_timeout"
    )]
    pub worker_timeout: Duration,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// CLI flag values layered over a loaded configuration. `None` means the
/// flag was not given and the file (or default) value stands.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub thread_count: Option<NonZeroUsize>,
    pub strategy: Option<PartitionStrategy>,
    pub worker_timeout: Option<Duration>,
    pub log_level: Option<String>,
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_worker_timeout() -> Duration {
    Duration::from_secs(60 * 60)
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            thread_count: default_thread_count(),
            strategy: PartitionStrategy::default(),
            worker_timeout: default_worker_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl FinderConfig {
    /// Loads configuration from the default locations.
    pub fn load() -> FinderResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, additionally reading a specific file when given.
    /// A missing explicit file is an error; missing default-location files
    /// are skipped silently.
    pub fn load_from(config_path: Option<&Path>) -> FinderResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let default_locations = [
            // Global config
            dirs::config_dir().map(|p| p.join("wordscout/config.yaml")),
            // Local config
            Some(PathBuf::from(".wordscout.yaml")),
        ];
        for path in default_locations.iter().flatten() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| FinderError::config_error(e.to_string()))
    }

    /// Applies CLI flag values over this configuration; flags take
    /// precedence over config file values.
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(thread_count) = cli.thread_count {
            self.thread_count = thread_count;
        }
        if let Some(strategy) = cli.strategy {
            self.strategy = strategy;
        }
        if let Some(worker_timeout) = cli.worker_timeout {
            self.worker_timeout = worker_timeout;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            thread_count: 4
            strategy: range
            worker_timeout: "90s"
            log_level: "debug"
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = FinderConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.thread_count, NonZeroUsize::new(4).unwrap());
        assert_eq!(config.strategy, PartitionStrategy::Range);
        assert_eq!(config.worker_timeout, Duration::from_secs(90));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let config_content = r#"
            strategy: step
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = FinderConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.strategy, PartitionStrategy::Step);
        assert_eq!(config.worker_timeout, Duration::from_secs(3600));
        assert_eq!(config.log_level, "warn");
        assert_eq!(
            config.thread_count,
            NonZeroUsize::new(num_cpus::get()).unwrap()
        );
    }

    #[test]
    fn test_merge_with_cli() {
        let config = FinderConfig {
            thread_count: NonZeroUsize::new(4).unwrap(),
            strategy: PartitionStrategy::Range,
            worker_timeout: Duration::from_secs(3600),
            log_level: "warn".to_string(),
        };

        let merged = config.merge_with_cli(CliOverrides {
            thread_count: Some(NonZeroUsize::new(8).unwrap()),
            strategy: None,
            worker_timeout: Some(Duration::from_secs(30)),
            log_level: Some("debug".to_string()),
        });

        assert_eq!(merged.thread_count, NonZeroUsize::new(8).unwrap()); // CLI value
        assert_eq!(merged.strategy, PartitionStrategy::Range); // File value (no flag)
        assert_eq!(merged.worker_timeout, Duration::from_secs(30)); // CLI value
        assert_eq!(merged.log_level, "debug"); // CLI value
    }

    #[test]
    fn test_invalid_config() {
        let config_content = r#"
            thread_count: 0         # Must be non-zero
            worker_timeout: "soon"  # Not a duration
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let result = FinderConfig::load_from(Some(&config_path));
        assert!(result.is_err(), "Expected error loading invalid config");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = FinderConfig::load_from(Some(Path::new("nonexistent.yaml")));
        assert!(result.is_err());
    }
}
