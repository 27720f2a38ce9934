use std::time::Duration;

use actix_web::cookie::Key;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::repository::LatencyConfig;
use crate::services::dashboard::StatsSource;

/// Configuration options of the tender console.
///
/// Values are read from `config/default.yaml`, then `config/{APP_ENV}.yaml`,
/// then `APP__*` environment variables. Missing keys fall back to
/// [`ServerConfig::default`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Session signing secret. Shorter than 64 bytes means a random key per
    /// process.
    pub secret: String,
    pub read_latency_ms: u64,
    pub write_latency_ms: u64,
    pub auth_latency_ms: u64,
    /// Load the demo tenders and bids on startup.
    pub seed_fixtures: bool,
    /// Compute dashboard aggregates from the store instead of the snapshot.
    pub live_dashboard_stats: bool,
    pub closing_soon_days: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            secret: String::new(),
            read_latency_ms: 500,
            write_latency_ms: 500,
            auth_latency_ms: 1000,
            seed_fixtures: true,
            live_dashboard_stats: false,
            closing_soon_days: 30,
        }
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn latency(&self) -> LatencyConfig {
        LatencyConfig {
            read: Duration::from_millis(self.read_latency_ms),
            write: Duration::from_millis(self.write_latency_ms),
        }
    }

    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn stats_source(&self) -> StatsSource {
        if self.live_dashboard_stats {
            StatsSource::Live {
                closing_soon_days: self.closing_soon_days,
            }
        } else {
            StatsSource::Snapshot
        }
    }

    pub fn session_key(&self) -> Key {
        if self.secret.len() >= 64 {
            Key::from(self.secret.as_bytes())
        } else {
            log::warn!("Session secret is missing or too short; using a random key");
            Key::generate()
        }
    }
}
