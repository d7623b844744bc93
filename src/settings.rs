use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::utils::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL};

/// Client and logging settings.
///
/// Layered as defaults, then a TOML file, then `CLIMATE_NODE_*` environment
/// variables. Anything left unset defers to the AWS SDK's own provider chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub profile: Option<String>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            profile: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings. An explicit `path` must exist; without one,
    /// `climate-node.toml` in the working directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(CONFIG_ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClimateError;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(CONFIG_ENV_PREFIX).source(Some(source))
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::load_with_env(None, env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_then_env_override() {
        let file = toml_file(
            "region = \"eu-west-2\"\nendpoint_url = \"http://localhost:8000\"\nlog_level = \"info\"\n",
        );

        let settings = Settings::load_with_env(
            Some(file.path()),
            env(&[("CLIMATE_NODE_REGION", "us-east-1")]),
        )
        .unwrap();

        assert_eq!(settings.region.as_deref(), Some("us-east-1"));
        assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(settings.profile, None);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = Settings::load_with_env(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, ClimateError::Config(_)));
        assert_eq!(err.label(), "Got error loading configuration:");
    }
}
