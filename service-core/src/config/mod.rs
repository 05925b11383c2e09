use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Deployment environment. Controls whether missing configuration keys
/// fall back to dev defaults or abort startup.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn is_prod(self) -> bool {
        self == Environment::Prod
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub environment: Environment,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            // Bare ENVIRONMENT wins over file/prefixed sources so that
            // deploy manifests can set it without the APP__ prefix.
            .set_override_option(
                "environment",
                env::var("ENVIRONMENT").ok().map(|v| v.to_lowercase()),
            )?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Read an environment variable, falling back to `default` outside prod.
/// In prod a missing key is always an error; keys with no default are
/// required everywhere.
pub fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_prefers_set_variable() {
        unsafe { env::set_var("CORE_CONFIG_TEST_KEY", "from-env") };
        let value = get_env("CORE_CONFIG_TEST_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "from-env");
        unsafe { env::remove_var("CORE_CONFIG_TEST_KEY") };
    }

    #[test]
    fn get_env_falls_back_in_dev_only() {
        let value = get_env("CORE_CONFIG_MISSING_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");

        let err = get_env("CORE_CONFIG_MISSING_KEY", Some("fallback"), true);
        assert!(err.is_err());
    }

    #[test]
    fn get_env_without_default_is_required() {
        assert!(get_env("CORE_CONFIG_NO_DEFAULT_KEY", None, false).is_err());
    }
}
