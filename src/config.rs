//! Configuration types for number-lookup

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Query parameter that carries the target number (default: "mobile")
pub const DEFAULT_QUERY_PARAM: &str = "mobile";

/// User-Agent sent with every lookup request
pub const DEFAULT_USER_AGENT: &str = "WASP/1.0";

/// Main configuration for number-lookup
///
/// Every field has a default, so an empty JSON object (or no file at all) is a
/// valid configuration. CLI flags are applied on top of whatever was loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Lookup service URL; the target number is appended as a query parameter
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name of the query parameter carrying the number (default: "mobile")
    #[serde(default = "default_query_param")]
    pub query_param: String,

    /// User-Agent header value (default: "WASP/1.0")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout (default: 40 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// Pause between targets in batch mode (default: 2 seconds)
    #[serde(default = "default_batch_delay", with = "duration_serde")]
    pub batch_delay: Duration,

    /// Banner file shown at startup (default: "banner.txt")
    #[serde(default = "default_banner_path")]
    pub banner_path: PathBuf,

    /// Scan animation settings
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            query_param: default_query_param(),
            user_agent: default_user_agent(),
            timeout: default_timeout(),
            batch_delay: default_batch_delay(),
            banner_path: default_banner_path(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing keys fall back to their defaults. Nothing is validated here;
    /// call [`Config::validate`] once command-line overrides are applied.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(
                "config",
                format!("failed to read config file '{}': {}", path.display(), e),
            )
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Check that the configuration can drive a lookup
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| Error::config("endpoint", format!("invalid endpoint URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(
                "endpoint",
                format!("unsupported endpoint scheme '{}'", url.scheme()),
            ));
        }
        if self.query_param.trim().is_empty() {
            return Err(Error::config(
                "query_param",
                "query parameter name must not be empty",
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("timeout", "timeout must be greater than zero"));
        }
        Ok(())
    }
}

/// Staged progress feedback shown while a lookup is prepared
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Show the animation at all (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Delay between spinner frames in milliseconds (default: 100)
    #[serde(default = "default_frame_delay", with = "duration_millis_serde")]
    pub frame_delay: Duration,

    /// Pause after each completed phase in milliseconds (default: 200)
    #[serde(default = "default_phase_pause", with = "duration_millis_serde")]
    pub phase_pause: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_delay: default_frame_delay(),
            phase_pause: default_phase_pause(),
        }
    }
}

impl AnimationConfig {
    /// An animation that prints its phases without sleeping
    pub fn instant() -> Self {
        Self {
            enabled: true,
            frame_delay: Duration::ZERO,
            phase_pause: Duration::ZERO,
        }
    }
}

fn default_endpoint() -> String {
    "https://api.example.com/v1/fetch-mobile-details".to_string()
}

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(40)
}

fn default_batch_delay() -> Duration {
    Duration::from_secs(2)
}

fn default_banner_path() -> PathBuf {
    PathBuf::from("banner.txt")
}

fn default_true() -> bool {
    true
}

fn default_frame_delay() -> Duration {
    Duration::from_millis(100)
}

fn default_phase_pause() -> Duration {
    Duration::from_millis(200)
}

// Duration serialization helper (whole seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// Duration serialization helper (milliseconds)
mod duration_millis_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
