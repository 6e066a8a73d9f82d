//! Centralized configuration (environment variables + defaults).

use crate::validation::rules::{integer, non_empty};
use crate::validation::Validator;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_AGIFY_URL: &str = "https://api.agify.io";
pub const DEFAULT_GENDERIZE_URL: &str = "https://api.genderize.io";
pub const DEFAULT_NATIONALIZE_URL: &str = "https://api.nationalize.io";

#[derive(Debug, Error)]
#[error("invalid configuration:\n{0}")]
pub struct ConfigError(pub Validator);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub db_max_connections: u32,
    pub enrich: EnrichConfig,
}

/// Base URLs and timeout for the name lookup APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichConfig {
    pub agify_url: String,
    pub genderize_url: String,
    pub nationalize_url: String,
    pub timeout: Duration,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            agify_url: DEFAULT_AGIFY_URL.to_string(),
            genderize_url: DEFAULT_GENDERIZE_URL.to_string(),
            nationalize_url: DEFAULT_NATIONALIZE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(&std::env::vars().collect())
    }

    /// Builds a config from an explicit variable map. All problems are
    /// reported together.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| {
            vars.get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        let mut v = Validator::new();

        let database_url = get("DATABASE_URL", "");
        v.check_with_rules("DATABASE_URL", &database_url, &[&non_empty]);

        // Accepts both "8080" and the ":8080" listen-address form.
        let port_raw = get("SERVER_PORT", "8080");
        let port_digits = port_raw.strip_prefix(':').unwrap_or(&port_raw);
        let mut server_port = 0;
        if v.check_with_rules("SERVER_PORT", port_digits, &[&non_empty, &integer(0)]) {
            match port_digits.parse::<u16>() {
                Ok(port) => server_port = port,
                Err(_) => v.add_error("SERVER_PORT", "must be between 0 and 65535"),
            }
        }

        let max_raw = get("DB_MAX_CONNECTIONS", "5");
        let mut db_max_connections = 0;
        if v.check_with_rules("DB_MAX_CONNECTIONS", &max_raw, &[&integer(32)]) {
            db_max_connections = max_raw.parse::<u32>().unwrap_or(0);
            v.check(db_max_connections > 0, "DB_MAX_CONNECTIONS", "must be positive");
        }

        let agify_url = get("AGIFY_URL", DEFAULT_AGIFY_URL);
        let genderize_url = get("GENDERIZE_URL", DEFAULT_GENDERIZE_URL);
        let nationalize_url = get("NATIONALIZE_URL", DEFAULT_NATIONALIZE_URL);
        v.check_with_rules("AGIFY_URL", &agify_url, &[&non_empty]);
        v.check_with_rules("GENDERIZE_URL", &genderize_url, &[&non_empty]);
        v.check_with_rules("NATIONALIZE_URL", &nationalize_url, &[&non_empty]);

        let timeout_raw = get("ENRICH_TIMEOUT_SECS", "10");
        let mut timeout = Duration::ZERO;
        if v.check_with_rules("ENRICH_TIMEOUT_SECS", &timeout_raw, &[&integer(32)]) {
            match timeout_raw.parse::<u64>() {
                Ok(secs) if secs > 0 => timeout = Duration::from_secs(secs),
                _ => v.add_error("ENRICH_TIMEOUT_SECS", "must be positive"),
            }
        }

        if !v.valid() {
            return Err(ConfigError(v));
        }

        Ok(Self {
            database_url,
            server_port,
            db_max_connections,
            enrich: EnrichConfig {
                agify_url,
                genderize_url,
                nationalize_url,
                timeout,
            },
        })
    }
}
