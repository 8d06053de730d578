//! Startup configuration.
//!
//! Defaults are overlaid by an optional `ceo_platform.json` in the working
//! directory, then by `CEO_*` environment variables such as
//! `CEO_DATABASE_URL` and `CEO_CREATE_SCHEMA`.

use std::path::Path;
use std::time::Duration;

use config::{ConfigError, Environment, File, FileFormat, Map};
use log::info;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "ceo_platform.json";
pub const DEFAULT_DATABASE_URL: &str = "mysql://root@localhost/aq_ceo";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// sqlx connection URL, `mysql://` or `sqlite://`.
    /// Environment: CEO_DATABASE_URL
    pub database_url: String,

    /// Create the `employer` table on startup when it is missing.
    /// Environment: CEO_CREATE_SCHEMA
    pub create_schema: bool,

    /// Upper bound on a single connection attempt. `None` waits as long as
    /// the driver does.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            create_schema: false,
            connect_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(Path::new(CONFIG_FILE), None)
    }

    /// Layers the JSON file at `path` (optional) and the `CEO_` environment
    /// over the defaults. `env` replaces the process environment when given.
    pub fn from_sources(
        path: &Path,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
        }
        let settings = config::Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("CEO")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;
        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "database_url cannot be empty".into(),
            ));
        }
        if self.connect_timeout_secs == Some(0) {
            return Err(ConfigError::Message(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::from_sources(&dir.path().join(CONFIG_FILE), env(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "connect_timeout_secs": 3 }"#).unwrap();

        let config = Config::from_sources(&path, env(&[])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.connect_timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "database_url = nope").unwrap();
        assert!(Config::from_sources(&path, env(&[])).is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "database_url": "mysql://db/aq_ceo" }"#).unwrap();

        let config = Config::from_sources(
            &path,
            env(&[("CEO_DATABASE_URL", "sqlite://ceo.db"), ("CEO_CREATE_SCHEMA", "true")]),
        )
        .unwrap();
        assert_eq!(config.database_url, "sqlite://ceo.db");
        assert!(config.create_schema);
    }

    #[test]
    fn schema_flag_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = Config::from_sources(&path, env(&[("CEO_CREATE_SCHEMA", "TRUE")])).unwrap();
        assert!(config.create_schema);
    }

    #[test]
    fn unparseable_schema_flag_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert!(Config::from_sources(&path, env(&[("CEO_CREATE_SCHEMA", "ture")])).is_err());
    }

    #[test]
    fn validation_rejects_empty_url_and_zero_timeout() {
        let empty = Config { database_url: "  ".to_string(), ..Config::default() };
        assert!(matches!(empty.validate(), Err(ConfigError::Message(_))));

        let zero = Config { connect_timeout_secs: Some(0), ..Config::default() };
        assert!(zero.validate().is_err());
    }
}
