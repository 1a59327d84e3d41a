use std::{env, fmt};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u32 = 8000;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 4;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Production => "info",
            Self::Development => "debug",
        }
    }

    pub fn colored_logs(&self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    MissingVariable(&'static str),
    InvalidVariable(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariable(name) => write!(f, "{name} not set"),
            Self::InvalidVariable(name) => write!(f, "Invalid {name} value"),
        }
    }
}

impl std::error::Error for Error {}

fn parse_or<F>(lookup: &F, name: &'static str, default: u32) -> Result<u32, Error>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidVariable(name)),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingVariable("DATABASE_URL"))?;
        let database_max_connections = parse_or(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(Error::InvalidVariable("DATABASE_MAX_CONNECTIONS"));
        }

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let url = lookup("URL").unwrap_or_else(|| format!("http://{}:{}", host, port));

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections: database_max_connections,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_are_applied() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/meals")]))
                .unwrap();

        assert_eq!(config.database.url, "postgres://localhost/meals");
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8000);
        assert_eq!(config.app.url, "http://0.0.0.0:8000");
        assert_eq!(config.app.environment, AppEnvironment::Development);
    }

    #[test]
    fn database_url_is_required() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert_eq!(err, Error::MissingVariable("DATABASE_URL"));
        assert_eq!(err.to_string(), "DATABASE_URL not set");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/meals"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(err, Error::InvalidVariable("PORT"));
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/meals"),
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("APP_ENV", "production"),
            ("URL", "https://meals.example.com"),
            ("DATABASE_MAX_CONNECTIONS", "16"),
        ]))
        .unwrap();

        assert_eq!(config.app.host, "127.0.0.1");
        assert_eq!(config.app.port, 3000);
        assert_eq!(config.app.url, "https://meals.example.com");
        assert_eq!(config.app.environment, AppEnvironment::Production);
        assert_eq!(config.database.max_connections, 16);
    }

    #[test]
    fn environment_selects_log_defaults() {
        let production = AppEnvironment::from("production".to_string());
        assert_eq!(production.default_log_filter(), "info");
        assert!(!production.colored_logs());

        let development = AppEnvironment::from("staging".to_string());
        assert_eq!(development, AppEnvironment::Development);
        assert_eq!(development.default_log_filter(), "debug");
        assert!(development.colored_logs());
    }

    #[test]
    fn zero_connections_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/meals"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert_eq!(err, Error::InvalidVariable("DATABASE_MAX_CONNECTIONS"));
    }
}
