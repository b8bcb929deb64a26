use ::config::{Config, Environment};
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://octofit.db?mode=rwc";
pub const DEFAULT_LOG_FILTER: &str = "octofit=info,store=info";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where the entity store lives (`DATABASE_URL`)
    pub database_url: String,
    /// tracing-subscriber filter directives (`RUST_LOG`)
    #[serde(rename = "rust_log")]
    pub log_filter: String,
}

impl Settings {
    /// Load settings from a `.env` file and the process environment,
    /// falling back to defaults for anything unset.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("rust_log", DEFAULT_LOG_FILTER)?
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::Map;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::default().source(Some(source))
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let settings = Settings::from_environment(environment(&[])).unwrap();

        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = Settings::from_environment(environment(&[
            ("DATABASE_URL", "sqlite:///tmp/heroes.sqlite?mode=rwc"),
            ("RUST_LOG", "debug"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(settings.database_url, "sqlite:///tmp/heroes.sqlite?mode=rwc");
        assert_eq!(settings.log_filter, "debug");
    }
}
