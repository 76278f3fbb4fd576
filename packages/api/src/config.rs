//! Client configuration from environment variables.
//!
//! Native builds load a `.env` file through `dotenvy` and then read the process
//! environment. WASM builds have no process environment, so the values are baked
//! in at compile time with `option_env!`.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GRAPHQL_ENDPOINT_VAR: &str = "HEALTH_CHAIN_GRAPHQL_ENDPOINT";
pub const LOGOUT_URL_VAR: &str = "HEALTH_CHAIN_LOGOUT_URL";
pub const API_URL_VAR: &str = "HEALTH_CHAIN_API_URL";
pub const CONTRACT_ADDRESS_VAR: &str = "HEALTH_CHAIN_CONTRACT_ADDRESS";

const DEFAULT_API_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
}

/// Endpoints and contract settings the portal needs at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// GraphQL endpoint every query and mutation is sent to.
    pub graphql_endpoint: String,
    /// Endpoint that clears the backend session cookie.
    pub logout_endpoint: String,
    /// Backend origin hosting the OAuth entry points.
    pub api_url: String,
    /// Health-access contract for record write-through. `None` disables it.
    pub contract_address: Option<String>,
}

impl ClientConfig {
    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let graphql_endpoint = get(GRAPHQL_ENDPOINT_VAR).ok_or(ConfigError::Missing(GRAPHQL_ENDPOINT_VAR))?;
        let logout_endpoint = get(LOGOUT_URL_VAR).ok_or(ConfigError::Missing(LOGOUT_URL_VAR))?;
        let api_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        validate_url(GRAPHQL_ENDPOINT_VAR, &graphql_endpoint)?;
        validate_url(LOGOUT_URL_VAR, &logout_endpoint)?;
        validate_url(API_URL_VAR, &api_url)?;

        Ok(Self {
            graphql_endpoint,
            logout_endpoint,
            api_url: api_url.trim_end_matches('/').to_string(),
            contract_address: get(CONTRACT_ADDRESS_VAR),
        })
    }

    /// Load the config for the current platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config for the current platform.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                GRAPHQL_ENDPOINT_VAR => option_env!("HEALTH_CHAIN_GRAPHQL_ENDPOINT"),
                LOGOUT_URL_VAR => option_env!("HEALTH_CHAIN_LOGOUT_URL"),
                API_URL_VAR => option_env!("HEALTH_CHAIN_API_URL"),
                CONTRACT_ADDRESS_VAR => option_env!("HEALTH_CHAIN_CONTRACT_ADDRESS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Backend URL that starts the Google OAuth flow.
    pub fn google_login_url(&self) -> String {
        format!("{}/auth/google", self.api_url)
    }
}

fn validate_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map(|_| ()).map_err(|_| ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_required_endpoints() {
        let config = ClientConfig::from_lookup(lookup(&[
            (GRAPHQL_ENDPOINT_VAR, "http://localhost:4000/graphql"),
            (LOGOUT_URL_VAR, "http://localhost:4000/auth/logout"),
        ]))
        .unwrap();

        assert_eq!(config.graphql_endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.logout_endpoint, "http://localhost:4000/auth/logout");
        assert_eq!(config.api_url, "http://localhost:4000");
        assert!(config.contract_address.is_none());
    }

    #[test]
    fn test_missing_graphql_endpoint() {
        let err = ClientConfig::from_lookup(lookup(&[(LOGOUT_URL_VAR, "http://localhost/logout")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing(GRAPHQL_ENDPOINT_VAR));
    }

    #[test]
    fn test_blank_logout_counts_as_missing() {
        let err = ClientConfig::from_lookup(lookup(&[
            (GRAPHQL_ENDPOINT_VAR, "http://localhost/graphql"),
            (LOGOUT_URL_VAR, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(LOGOUT_URL_VAR));
    }

    #[test]
    fn test_invalid_url() {
        let err = ClientConfig::from_lookup(lookup(&[
            (GRAPHQL_ENDPOINT_VAR, "not a url"),
            (LOGOUT_URL_VAR, "http://localhost/logout"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: GRAPHQL_ENDPOINT_VAR, .. }));
    }

    #[test]
    fn test_optional_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            (GRAPHQL_ENDPOINT_VAR, "https://api.example.org/graphql"),
            (LOGOUT_URL_VAR, "https://api.example.org/logout"),
            (API_URL_VAR, "https://api.example.org/"),
            (CONTRACT_ADDRESS_VAR, "0x5FbDB2315678afecb367f032d93F642f64180aa3"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.org");
        assert_eq!(config.google_login_url(), "https://api.example.org/auth/google");
        assert_eq!(
            config.contract_address.as_deref(),
            Some("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );
    }
}
