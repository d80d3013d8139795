//! Configuration handling for easy-commit

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::commit_type::COMMIT_TYPES;
use crate::error::EasyCommitError;

/// File names searched for, in order, in the working directory and then the home directory
pub const CONFIG_FILENAMES: &[&str] = &[".easy-commit.toml", "easy-commit.toml"];

/// Upper bound on validation worker threads
pub const MAX_WORKERS: usize = 16;

/// easy-commit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Commit content limits
    #[serde(default)]
    pub commit: CommitConfig,

    /// Validation pipeline settings
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Log output settings
    #[serde(default)]
    pub logger: LoggerConfig,
}

/// Limits applied to commit fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Maximum description length in characters
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,

    /// Maximum body length in characters (newlines included)
    #[serde(default = "default_max_body_length")]
    pub max_body_length: usize,

    /// Maximum scope length in characters
    #[serde(default = "default_max_scope_length")]
    pub max_scope_length: usize,

    /// Hard-wrap width of the body editor
    #[serde(default = "default_body_line_width")]
    pub body_line_width: usize,

    /// Characters that may not appear in the description
    #[serde(default)]
    pub invalid_chars: Vec<String>,

    /// Commit types accepted by the validator
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

fn default_max_description_length() -> usize {
    72
}

fn default_max_body_length() -> usize {
    500
}

fn default_max_scope_length() -> usize {
    30
}

fn default_body_line_width() -> usize {
    72
}

fn default_allowed_types() -> Vec<String> {
    COMMIT_TYPES.iter().map(|t| t.name.to_string()).collect()
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            max_description_length: default_max_description_length(),
            max_body_length: default_max_body_length(),
            max_scope_length: default_max_scope_length(),
            body_line_width: default_body_line_width(),
            invalid_chars: Vec::new(),
            allowed_types: default_allowed_types(),
        }
    }
}

/// Validation pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Number of worker threads used to evaluate rules
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_workers() -> usize {
    4
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

impl ValidatorConfig {
    /// Worker count clamped into `[1, MAX_WORKERS]`
    pub fn effective_workers(&self) -> usize {
        self.workers.clamp(1, MAX_WORKERS)
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// One of: error, warn, info, debug, trace, off
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse and check configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, EasyCommitError> {
        let config: Self = toml::from_str(content).map_err(|e| EasyCommitError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path; the file must exist, parse, and pass [`Config::validate`]
    pub fn load_from_path(path: &Path) -> Result<Self, EasyCommitError> {
        let content = fs::read_to_string(path).map_err(|e| {
            EasyCommitError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| EasyCommitError::Config(format!("{}: {}", path.display(), e)))?;
        config
            .check()
            .map_err(|reason| EasyCommitError::Config(format!("{}: {}", path.display(), reason)))?;
        Ok(config)
    }

    /// Reject values no commit could satisfy
    ///
    /// `allowed_types` must name at least one non-blank type, the description
    /// limit must be positive, and `workers` must lie in `[1, MAX_WORKERS]`.
    /// Zero body or scope limits are accepted and leave those fields empty.
    pub fn validate(&self) -> Result<(), EasyCommitError> {
        self.check().map_err(EasyCommitError::Config)
    }

    fn check(&self) -> Result<(), String> {
        if self.commit.allowed_types.is_empty() {
            return Err("commit.allowed_types must list at least one type".to_string());
        }
        if self.commit.allowed_types.iter().any(|t| t.trim().is_empty()) {
            return Err("commit.allowed_types contains a blank type".to_string());
        }
        if self.commit.max_description_length == 0 {
            return Err("commit.max_description_length must be at least 1".to_string());
        }
        if !(1..=MAX_WORKERS).contains(&self.validator.workers) {
            return Err(format!(
                "validator.workers must be between 1 and {}, got {}",
                MAX_WORKERS, self.validator.workers
            ));
        }
        Ok(())
    }

    /// Find the first config file in `project_dir`, then in `home_dir`
    pub fn find_config_file(project_dir: &Path, home_dir: Option<&Path>) -> Option<PathBuf> {
        let mut search = vec![project_dir];
        if let Some(home) = home_dir {
            search.push(home);
        }

        search
            .into_iter()
            .flat_map(|dir| CONFIG_FILENAMES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration from the project directory or the home directory.
    ///
    /// A missing file yields defaults. A file that exists but does not parse,
    /// or fails [`Config::validate`], is reported with a warning and defaults
    /// are used instead.
    pub fn load_or_default(project_dir: &Path) -> Self {
        let home = dirs::home_dir();
        Self::load_or_default_with_home(project_dir, home.as_deref())
    }

    /// Same as [`Config::load_or_default`] with an explicit home directory
    pub fn load_or_default_with_home(project_dir: &Path, home_dir: Option<&Path>) -> Self {
        let Some(path) = Self::find_config_file(project_dir, home_dir) else {
            log::debug!("no config file found, using defaults");
            return Self::default();
        };

        match Self::load_from_path(&path) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("failed to parse config file {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.commit.max_description_length, 72);
        assert_eq!(config.commit.max_body_length, 500);
        assert_eq!(config.commit.max_scope_length, 30);
        assert_eq!(config.commit.body_line_width, 72);
        assert!(config.commit.invalid_chars.is_empty());
        assert_eq!(config.commit.allowed_types.len(), 10);
        assert_eq!(config.validator.workers, 4);
        assert_eq!(config.logger.level, "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml_str(
            r##"
[commit]
max_description_length = 50
invalid_chars = ["#", ";"]
"##,
        )
        .unwrap();

        assert_eq!(config.commit.max_description_length, 50);
        assert_eq!(config.commit.invalid_chars, vec!["#", ";"]);
        assert_eq!(config.commit.max_body_length, 500);
        assert_eq!(config.validator.workers, 4);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml_str("[commit\nmax = ").unwrap_err();
        assert!(matches!(err, EasyCommitError::Config(_)));
    }

    #[test]
    fn test_effective_workers_clamped() {
        assert_eq!(ValidatorConfig { workers: 0 }.effective_workers(), 1);
        assert_eq!(ValidatorConfig { workers: 64 }.effective_workers(), MAX_WORKERS);
        assert_eq!(ValidatorConfig { workers: 3 }.effective_workers(), 3);
    }

    #[test]
    fn test_project_file_wins_over_home() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(
            project.path().join(".easy-commit.toml"),
            "[commit]\nmax_scope_length = 20\n",
        )
        .unwrap();
        fs::write(
            home.path().join(".easy-commit.toml"),
            "[commit]\nmax_scope_length = 10\n",
        )
        .unwrap();

        let config = Config::load_or_default_with_home(project.path(), Some(home.path()));
        assert_eq!(config.commit.max_scope_length, 20);
    }

    #[test]
    fn test_home_file_used_when_project_has_none() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join("easy-commit.toml"), "[validator]\nworkers = 2\n").unwrap();

        let config = Config::load_or_default_with_home(project.path(), Some(home.path()));
        assert_eq!(config.validator.workers, 2);
    }

    #[test]
    fn test_unparseable_file_falls_back_to_defaults() {
        let project = tempfile::tempdir().unwrap();
        fs::write(project.path().join(".easy-commit.toml"), "not = [valid").unwrap();

        let config = Config::load_or_default_with_home(project.path(), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_allowed_types_rejected() {
        let err = Config::from_toml_str("[commit]\nallowed_types = []\n").unwrap_err();
        assert!(matches!(err, EasyCommitError::Config(_)));
        assert!(err.to_string().contains("allowed_types"));

        let err = Config::from_toml_str("[commit]\nallowed_types = [\"feat\", \" \"]\n").unwrap_err();
        assert!(err.to_string().contains("blank type"));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = Config::from_toml_str("[commit]\nmax_description_length = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_description_length"));

        assert!(Config::from_toml_str("[validator]\nworkers = 0\n").is_err());
        assert!(Config::from_toml_str("[validator]\nworkers = 17\n").is_err());
        assert!(Config::from_toml_str("[validator]\nworkers = 16\n").is_ok());

        // Zero body and scope limits are allowed
        let config = Config::from_toml_str("[commit]\nmax_body_length = 0\nmax_scope_length = 0\n").unwrap();
        assert_eq!(config.commit.max_body_length, 0);
    }

    #[test]
    fn test_explicit_file_with_bad_values_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[commit]\nallowed_types = []\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, EasyCommitError::Config(_)));
        assert!(err.to_string().contains("custom.toml"));
        assert!(err.to_string().contains("allowed_types"));
    }

    #[test]
    fn test_discovered_file_with_bad_values_falls_back_to_defaults() {
        let project = tempfile::tempdir().unwrap();
        fs::write(
            project.path().join(".easy-commit.toml"),
            "[commit]\nallowed_types = []\nmax_scope_length = 12\n",
        )
        .unwrap();

        let config = Config::load_or_default_with_home(project.path(), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, EasyCommitError::Config(_)));
    }
}
