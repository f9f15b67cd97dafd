//! Configuration for the `roster` binary.
//!
//! Values come from, in increasing priority: built-in defaults, a
//! `roster.toml` file, `ROSTER_*` environment variables and finally
//! command-line flags (applied by the caller).

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "roster.toml";
pub const DEFAULT_DATA_FILE: &str = "cohort_data.txt";

pub const ENV_DATA_FILE: &str = "ROSTER_DATA_FILE";
pub const ENV_FORMAT: &str = "ROSTER_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(RosterError::Config(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    /// Roster file queried when no `--data` flag is given.
    pub data_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl RosterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from an explicit path. A missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `explicit` if given, otherwise `roster.toml` in `dir` when it
    /// exists, then apply environment overrides.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = dir.join(CONFIG_FILE_NAME);
                if implicit.is_file() {
                    Self::from_file(&implicit)?
                } else {
                    Self::new()
                }
            }
        };

        config.merge_env_vars();
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_file) = lookup(ENV_DATA_FILE) {
            if !data_file.is_empty() {
                self.data_file = Some(PathBuf::from(data_file));
            }
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            match format.parse::<OutputFormat>() {
                Ok(format) => self.format = Some(format),
                Err(e) => warn!("ignoring {ENV_FORMAT}: {e}"),
            }
        }
    }

    /// `--data` wins over the configured file, which wins over the default.
    pub fn resolve_data_file(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_toml() {
        let config = RosterConfig::from_toml_str(
            r#"
data_file = "data/roster.txt"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("data/roster.txt")));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = RosterConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, RosterError::Toml(_)));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = RosterConfig {
            data_file: Some(PathBuf::from("from_file.txt")),
            format: Some(OutputFormat::Text),
        };
        let env = vars(&[(ENV_DATA_FILE, "from_env.txt"), (ENV_FORMAT, "JSON")]);

        config.merge_vars(|k| env.get(k).cloned());

        assert_eq!(config.data_file, Some(PathBuf::from("from_env.txt")));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_env_format_is_ignored() {
        let mut config = RosterConfig::new();
        let env = vars(&[(ENV_FORMAT, "yaml"), (ENV_DATA_FILE, "")]);

        config.merge_vars(|k| env.get(k).cloned());

        assert_eq!(config.format, None);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_resolution_order() {
        let config = RosterConfig {
            data_file: Some(PathBuf::from("configured.txt")),
            format: Some(OutputFormat::Json),
        };

        assert_eq!(
            config.resolve_data_file(Some(Path::new("flag.txt"))),
            PathBuf::from("flag.txt")
        );
        assert_eq!(
            config.resolve_data_file(None),
            PathBuf::from("configured.txt")
        );
        assert_eq!(
            RosterConfig::new().resolve_data_file(None),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
        assert_eq!(
            config.resolve_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(RosterConfig::new().resolve_format(None), OutputFormat::Text);
    }

    #[test]
    fn test_implicit_config_file_is_optional() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load(None, dir.path());
        assert!(config.is_ok());
    }

    #[test]
    fn test_implicit_config_file_is_read() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "data_file = \"elsewhere.txt\"\n",
        )
        .unwrap();

        let config = RosterConfig::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("elsewhere.txt")));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = RosterConfig::load(Some(&dir.path().join("missing.toml")), dir.path())
            .unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }
}
