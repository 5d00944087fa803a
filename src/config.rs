use std::path::PathBuf;

use anyhow::Context;

use crate::catalog::ReferenceCheck;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding `products.json` and `categories.json`
    pub data_dir: PathBuf,
    /// Mount point for the API routes; empty serves them at the root
    pub api_prefix: String,
    pub reference_check: ReferenceCheck,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            data_dir: PathBuf::from("data"),
            api_prefix: "/api".to_string(),
            reference_check: ReferenceCheck::Warn,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests don't touch process env.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(port) => port.parse::<u16>().context("PORT must be a valid number")?,
                None => defaults.port,
            },
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            api_prefix: normalize_prefix(&lookup("API_PREFIX").unwrap_or(defaults.api_prefix)),
            reference_check: match lookup("CATALOG_REFERENCE_CHECK") {
                Some(raw) => raw
                    .parse::<ReferenceCheck>()
                    .map_err(anyhow::Error::msg)
                    .context("CATALOG_REFERENCE_CHECK is invalid")?,
                None => defaults.reference_check,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// "api", "/api/" and "/api" all become "/api"; "" and "/" become "".
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
