//! Configuration for the Pavilot client

use crate::contract::PavilotError;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    value::Value,
    Figment,
};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Name of the configuration section holding the settings
pub const SECTION: &str = "PavilotSettings";

/// Environment prefix; `PAVILOT_API_KEY` maps to `PavilotSettings.api_key`
pub const ENV_PREFIX: &str = "PAVILOT_";

/// Pavilot communication settings
///
/// Fields are optional on purpose: a missing or blank value is reported by
/// validation as `MissingConfiguration`, not by deserialization.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct PavilotSettings {
    /// Base url address for the api, e.g. `https://v1.pavilot.com`
    #[serde(default, alias = "endpoint", alias = "ApiEndpoint")]
    pub api_endpoint: Option<String>,

    /// Api subscription key
    #[serde(default, alias = "key", alias = "ApiKey")]
    pub api_key: Option<String>,

    /// HTTP transport tuning
    #[serde(default, alias = "Transport")]
    pub transport: TransportConfig,
}

impl PavilotSettings {
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            api_endpoint: Some(endpoint.into()),
            api_key: Some(key.into()),
            transport: TransportConfig::default(),
        }
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// Read the `PavilotSettings` section.
    ///
    /// Returns `Ok(None)` when the section does not exist.
    pub fn from_figment(figment: &Figment) -> Result<Option<Self>, PavilotError> {
        if !figment.contains(SECTION) {
            tracing::debug!(section = SECTION, "Pavilot settings section not found");
            return Ok(None);
        }

        figment
            .extract_inner::<Self>(SECTION)
            .map(Some)
            .map_err(|e| PavilotError::Config(e.to_string()))
    }

    /// Load settings from a YAML file overlaid with `PAVILOT_*` environment variables
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, PavilotError> {
        Self::from_figment(&Self::figment(path))
    }

    /// The figment used by [`PavilotSettings::load`]
    ///
    /// File keys are renamed to field names before the environment is merged,
    /// so `PAVILOT_API_KEY` overrides `ApiKey` instead of sitting beside it.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        let file = Figment::from(Yaml::file(path.as_ref()));
        // Unreadable files keep their provider so extraction reports the error
        let file = match file.extract::<Value>() {
            Ok(value) => Figment::from(Serialized::defaults(canonical_keys(value))),
            Err(_) => file,
        };

        file.merge(
            Env::prefixed(ENV_PREFIX)
                .lowercase(false)
                .map(|key| env_key(key.as_str()).into()),
        )
    }
}

/// `API_KEY` -> `PavilotSettings.api_key`,
/// `TRANSPORT__USER_AGENT` -> `PavilotSettings.transport.user_agent`
fn env_key(key: &str) -> String {
    format!("{SECTION}.{}", key.to_ascii_lowercase().replace("__", "."))
}

fn field_name(key: &str) -> Option<&'static str> {
    match key {
        "ApiEndpoint" | "endpoint" => Some("api_endpoint"),
        "ApiKey" | "key" => Some("api_key"),
        "Transport" => Some("transport"),
        _ => None,
    }
}

/// Rename aliased keys of the settings section; other sections are untouched
fn canonical_keys(mut value: Value) -> Value {
    if let Value::Dict(_, root) = &mut value {
        if let Some(Value::Dict(_, section)) = root.get_mut(SECTION) {
            *section = std::mem::take(section)
                .into_iter()
                .map(|(key, v)| match field_name(&key) {
                    Some(name) => (name.to_string(), v),
                    None => (key, v),
                })
                .collect();
        }
    }
    value
}

impl fmt::Debug for PavilotSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PavilotSettings")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("transport", &self.transport)
            .finish()
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportConfig {
    /// TCP connect timeout
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Whole-request timeout
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_user_agent() -> String {
    format!("pavilot-client/{}", env!("CARGO_PKG_VERSION"))
}
