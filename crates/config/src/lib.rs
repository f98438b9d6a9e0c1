//! Layered configuration.
//!
//! Values are merged in this order, later sources winning:
//!
//! 1. Built-in defaults.
//! 2. A configuration file: the path passed to [`load()`], or `reel.toml` in
//!    the working directory if it exists. TOML, YAML and JSON are accepted,
//!    chosen by file extension.
//! 3. Environment variables prefixed with `REEL_`, using `__` to separate
//!    nested keys (`REEL_SERVER__BIND=0.0.0.0:8080`).

pub mod error;

use directories::ProjectDirs;
use exn::{OptionExt, ResultExt};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Configuration file looked for in the working directory.
pub const DEFAULT_FILE: &str = "reel.toml";
/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "REEL_";
pub const DEFAULT_ORIGIN: &str = "https://himovies.sx";
const CACHE_FILE: &str = "cache.sqlite";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
    pub ttl: TtlConfig,
    pub server: ServerConfig,
    pub log: LogConfig,
}

/// The catalog origin and how to talk to it.
///
/// Header values left unset use the fetcher's built-in browser profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    pub timeout_secs: u64,
}
impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: None,
            accept: None,
            accept_language: None,
            timeout_secs: 30,
        }
    }
}
impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory,
    #[default]
    Sqlite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
impl CacheConfig {
    /// The configured database path, or `cache.sqlite` in the platform cache
    /// directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let dirs = ProjectDirs::from("", "", "reel").ok_or_raise(|| ErrorKind::NoCacheDirectory)?;
        Ok(dirs.cache_dir().join(CACHE_FILE))
    }
}

/// Cache lifetimes, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtlConfig {
    pub listing_minutes: u64,
    pub search_minutes: u64,
    pub player_minutes: u64,
    /// Applies to player resolutions that fell back to the watch page.
    pub player_fallback_minutes: u64,
}
impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            listing_minutes: 24 * 60,
            search_minutes: 60,
            player_minutes: 24 * 60,
            player_fallback_minutes: 60,
        }
    }
}
impl TtlConfig {
    pub fn listing(&self) -> Duration {
        minutes(self.listing_minutes)
    }

    pub fn search(&self) -> Duration {
        minutes(self.search_minutes)
    }

    pub fn player(&self) -> Duration {
        minutes(self.player_minutes)
    }

    pub fn player_fallback(&self) -> Duration {
        minutes(self.player_fallback_minutes)
    }
}

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m.saturating_mul(60))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// An `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl Config {
    /// The provider stack without extraction, for callers that want to layer
    /// further providers on top.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        let figment = match path {
            Some(path) => {
                if !path.is_file() {
                    exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
                }
                match path.extension().and_then(|ext| ext.to_str()) {
                    Some("toml") => figment.merge(Toml::file_exact(path)),
                    Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
                    Some("json") => figment.merge(Json::file_exact(path)),
                    _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
                }
            },
            None => figment.merge(Toml::file(DEFAULT_FILE)),
        };
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extract and validate a configuration from any figment.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let mut config: Config = figment.extract().or_raise(|| ErrorKind::Invalid)?;
        config.upstream.origin = config.upstream.origin.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let origin = &self.upstream.origin;
        if !(origin.starts_with("http://") || origin.starts_with("https://")) || origin.contains(char::is_whitespace) {
            exn::bail!(ErrorKind::Validation {
                field: "upstream.origin",
                reason: format!("expected an http(s) URL, found {origin:?}"),
            });
        }
        if self.upstream.timeout_secs == 0 {
            exn::bail!(ErrorKind::Validation {
                field: "upstream.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        let ttls = [
            ("ttl.listing_minutes", self.ttl.listing_minutes),
            ("ttl.search_minutes", self.ttl.search_minutes),
            ("ttl.player_minutes", self.ttl.player_minutes),
            ("ttl.player_fallback_minutes", self.ttl.player_fallback_minutes),
        ];
        if let Some((field, _)) = ttls.into_iter().find(|(_, minutes)| *minutes == 0) {
            exn::bail!(ErrorKind::Validation {
                field,
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Load the configuration from defaults, file and environment.
#[instrument(level = "debug")]
pub fn load(path: Option<&Path>) -> Result<Config> {
    Config::from_figment(&Config::figment(path)?)
}
