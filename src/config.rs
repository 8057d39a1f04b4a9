//! Process settings, read once at startup and passed by reference.

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5432/faculdade";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
pub const DEFAULT_OPENAPI_URL: &str = "/apiconf.json";
pub const DEFAULT_DOCS_URL: &str = "/api/v1/documentacao";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    /// Versioned prefix for resource routes, normalized to `/segment` form (empty means root).
    pub api_prefix: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub openapi_url: String,
    pub docs_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            api_prefix: DEFAULT_API_PREFIX.into(),
            host: "0.0.0.0".into(),
            port: 8000,
            max_connections: 5,
            openapi_url: DEFAULT_OPENAPI_URL.into(),
            docs_url: DEFAULT_DOCS_URL.into(),
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset keys take their defaults; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        Ok(Settings {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            api_prefix: normalize_prefix(&lookup("API_PREFIX").unwrap_or(defaults.api_prefix)),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            openapi_url: lookup("OPENAPI_URL").unwrap_or(defaults.openapi_url),
            docs_url: lookup("DOCS_URL").unwrap_or(defaults.docs_url),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn unset_variables_take_defaults() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_prefix, "/api/v1");
        assert_eq!(settings.port, 8000);
    }

    #[test]
    fn reads_overrides() {
        let settings = settings_from(&[
            ("DATABASE_URL", "postgres://app@db:5432/cursos"),
            ("PORT", "9000"),
            ("DB_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(settings.database_url, "postgres://app@db:5432/cursos");
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.max_connections, 12);
    }

    #[test]
    fn prefix_is_normalized() {
        assert_eq!(settings_from(&[("API_PREFIX", "api/v2/")]).unwrap().api_prefix, "/api/v2");
        assert_eq!(settings_from(&[("API_PREFIX", "/")]).unwrap().api_prefix, "");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = settings_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }
}
