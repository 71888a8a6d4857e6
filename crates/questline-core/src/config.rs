//! Configuration loading for Questline.
//!
//! The configuration lives in `questline-config.yaml`. Every section is
//! optional; missing keys fall back to the defaults the app ships with.
//!
//! ```yaml
//! progression:
//!   estimate:
//!     min_daily_minutes: 15
//!     weeks_per_month: "4.33"
//!   rewards:
//!     bonus_chance_per_10000: 2000
//! logging:
//!   level: debug
//!   format: json
//! ```

use std::path::Path;

use questline_progression::{AchievementCatalog, ProgressionConfig, ProgressionError};
use questline_types::Achievement;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds invalid values.
    #[error("invalid configuration: {source}")]
    Invalid {
        /// The underlying validation error.
        #[from]
        source: ProgressionError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestlineConfig {
    /// Estimation, reward, and onboarding parameters.
    #[serde(default)]
    pub progression: ProgressionConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Replacement achievement catalog. The standard catalog is used when absent.
    #[serde(default)]
    pub achievements: Option<Vec<Achievement>>,
}

impl QuestlineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `QUESTLINE_LOG_LEVEL` overrides `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Validate every section, including the achievement override.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.progression.validate()?;
        self.achievement_catalog()?;
        Ok(())
    }

    /// The achievement catalog this configuration selects.
    pub fn achievement_catalog(&self) -> Result<AchievementCatalog, ConfigError> {
        match &self.achievements {
            Some(entries) => Ok(AchievementCatalog::from_entries(entries.clone())?),
            None => Ok(AchievementCatalog::standard()),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Apply the `QUESTLINE_LOG_LEVEL` environment override.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("QUESTLINE_LOG_LEVEL") {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_yaml() {
        let config = QuestlineConfig::parse("").unwrap();
        assert_eq!(config.progression, ProgressionConfig::default());
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.achievements.is_none());
    }

    #[test]
    fn parse_partial_yaml() {
        let yaml = r#"
progression:
  estimate:
    max_daily_minutes: 90
    weeks_per_month: "4.5"
  onboarding:
    max_goals: 5
logging:
  format: json
"#;
        let config = QuestlineConfig::parse(yaml).unwrap();

        assert_eq!(config.progression.estimate.max_daily_minutes, 90);
        assert_eq!(config.progression.estimate.min_daily_minutes, 15);
        assert_eq!(
            config.progression.estimate.weeks_per_month.to_string(),
            "4.5"
        );
        assert_eq!(config.progression.onboarding.max_goals, 5);
        assert_eq!(config.progression.rewards.bonus_pct, 50);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let yaml = "progression:\n  estimate:\n    min_daily_minutes: 0\n";
        assert!(matches!(
            QuestlineConfig::parse(yaml),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            QuestlineConfig::parse("progression: [unclosed"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn achievement_override_replaces_catalog() {
        let yaml = r#"
achievements:
  - id: first-steps
    title: First Steps
    description: Finish a quest
    category: quests
    rarity: common
    xp_reward: 10
    rule:
      counter: quests_completed
      threshold: 1
"#;
        let catalog = QuestlineConfig::parse(yaml)
            .unwrap()
            .achievement_catalog()
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("first-steps").is_some());
    }

    #[test]
    fn duplicate_achievement_override_rejected() {
        let entry = r"
  - id: twice
    title: Twice
    description: Duplicate
    category: quests
    rarity: common
    xp_reward: 10
    rule:
      counter: quests_completed
      threshold: 1";
        let yaml = format!("achievements:{entry}{entry}\n");
        assert!(matches!(
            QuestlineConfig::parse(&yaml),
            Err(ConfigError::Invalid {
                source: ProgressionError::DuplicateAchievement(_)
            })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = QuestlineConfig::from_file(Path::new("/nonexistent/questline-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("questline-config.yaml");
        if path.exists() {
            let config = QuestlineConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
