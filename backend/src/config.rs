use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid ENVIRONMENT: {0} (expected development, staging or production)")]
    InvalidEnvironment(String),
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvironment(value.to_string())),
        }
    }

    fn default_port(self) -> u16 {
        match self {
            Self::Staging => 3100,
            _ => 3000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a local `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Production,
        };
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => environment.default_port(),
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("frontend/dist"));

        Ok(Self {
            environment,
            port,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_production_on_3000() {
        let config = load(&[]).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
    }

    #[test]
    fn staging_moves_the_default_port() {
        let config = load(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn explicit_port_wins() {
        let config = load(&[("ENVIRONMENT", "Development"), ("PORT", "8081"), ("STATIC_DIR", "/srv/site")]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.port, 8081);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            load(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort("http".to_string())
        );
        assert_eq!(
            load(&[("ENVIRONMENT", "qa")]).unwrap_err(),
            ConfigError::InvalidEnvironment("qa".to_string())
        );
    }
}
