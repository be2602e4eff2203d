use crate::server::{error::config::ConfigError, roster::locale::Locale};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: String,
    pub roster_locale: Locale,
    /// Username and password of a superuser created at startup if missing
    pub admin: Option<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or(ConfigError::MissingEnvVar(key.to_string()));

        let roster_locale = match lookup("ROSTER_LOCALE") {
            Some(value) => value
                .parse::<Locale>()
                .map_err(|reason| ConfigError::InvalidEnvValue {
                    var: "ROSTER_LOCALE".to_string(),
                    reason,
                })?,
            None => Locale::default(),
        };

        let admin = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some((username, password)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string())),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("ADMIN_USERNAME".to_string())),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            roster_locale,
            admin,
        })
    }
}
