use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::error::ConfigError;
use crate::links::DEFAULT_BASE_URL;
use crate::row::CompletionPolicy;
use crate::share::CopyFailure;
use crate::view::DEFAULT_WIDE_BREAKPOINT;

/// Environment variable overriding where the config file is read from.
pub const CONFIG_PATH_ENV: &str = "WORKOUT_TABLE_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "workout_table.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Root that share and repeat links are built on.
    pub base_url: Url,
    pub wide_breakpoint: f32,
    pub read_only: bool,
    pub completion_policy: CompletionPolicy,
    pub copy_failure: CopyFailure,
    /// Signed-in viewer, if any. Used only to decide whether sharing is offered.
    pub viewer_email: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            base_url: default_base_url(),
            wide_breakpoint: DEFAULT_WIDE_BREAKPOINT,
            read_only: false,
            completion_policy: CompletionPolicy::default(),
            copy_failure: CopyFailure::default(),
            viewer_email: None,
        }
    }
}

static DEFAULT_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL"));

fn default_base_url() -> Url {
    DEFAULT_BASE.clone()
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        if !(config.wide_breakpoint.is_finite() && config.wide_breakpoint > 0.0) {
            return Err(ConfigError::Breakpoint(config.wide_breakpoint));
        }
        Ok(config)
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&default_config_path())
    }
}

pub fn default_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = TableConfig::from_json("{}").unwrap();
        assert_eq!(config, TableConfig::default());
        assert_eq!(config.base_url.as_str(), "https://workout.lol/");
        assert_eq!(config.copy_failure, CopyFailure::KeepConfirmation);
    }

    #[test]
    fn default_base_matches_the_published_constant() {
        assert_eq!(default_base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(TableConfig::default().base_url, *DEFAULT_BASE);
    }

    #[test]
    fn reads_every_field() {
        let config = TableConfig::from_json(
            r#"{
                "base_url": "https://example.com/app",
                "wide_breakpoint": 600,
                "read_only": true,
                "completion_policy": "empty_is_incomplete",
                "copy_failure": "stay_idle",
                "viewer_email": "me@example.com"
            }"#,
        )
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://example.com/app");
        assert_eq!(config.wide_breakpoint, 600.0);
        assert!(config.read_only);
        assert_eq!(config.completion_policy, CompletionPolicy::EmptyIsIncomplete);
        assert_eq!(config.copy_failure, CopyFailure::StayIdle);
        assert_eq!(config.viewer_email.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(TableConfig::from_json(r#"{"base_url": "not a url"}"#), Err(ConfigError::Json(_))));
        assert!(matches!(TableConfig::from_json(r#"{"wide_breakpoint": 0}"#), Err(ConfigError::Breakpoint(_))));
        assert!(TableConfig::from_json(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = TableConfig::load(Path::new("no/such/workout_table.json")).unwrap();
        assert_eq!(config, TableConfig::default());
    }
}
