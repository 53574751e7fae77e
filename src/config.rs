//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `SHORT_URL_DOMAIN` - Prefix for returned short URLs (default: `http://localhost:8080`)
//! - `SNAPSHOT_PATH` - Snapshot file (default: `snapshot.db`)
//! - `SNAPSHOT_INTERVAL_SECS` - Seconds between snapshots (default: 5)
//! - `SNAPSHOT_FAIL_FAST` - Stop the process when a periodic snapshot fails (default: `false`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export SHORT_URL_DOMAIN="https://s.example.com"
//! export SNAPSHOT_PATH="/var/lib/hash-shortener/snapshot.db"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::snapshot::SaveFailurePolicy;

const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_SHORT_URL_DOMAIN: &str = "http://localhost:8080";
const DEFAULT_SNAPSHOT_PATH: &str = "snapshot.db";
const DEFAULT_SNAPSHOT_INTERVAL_SECS: u64 = 5;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public prefix of short URLs, without a trailing slash.
    pub short_url_domain: String,
    pub snapshot_path: PathBuf,
    pub snapshot_interval_secs: u64,
    /// When true, a failed periodic snapshot stops the process.
    pub snapshot_fail_fast: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SNAPSHOT_INTERVAL_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());

        let short_url_domain = env::var("SHORT_URL_DOMAIN")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SHORT_URL_DOMAIN.to_string())
            .trim_end_matches('/')
            .to_string();

        let snapshot_path = env::var("SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH));

        let snapshot_interval_secs = match env::var("SNAPSHOT_INTERVAL_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("SNAPSHOT_INTERVAL_SECS must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_SNAPSHOT_INTERVAL_SECS,
        };

        let snapshot_fail_fast = env::var("SNAPSHOT_FAIL_FAST")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            short_url_domain,
            snapshot_path,
            snapshot_interval_secs,
            snapshot_fail_fast,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` has no port
    /// - `short_url_domain` is not an http(s) URL
    /// - `snapshot_path` is empty
    /// - `snapshot_interval_secs` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.short_url_domain.starts_with("http://")
            && !self.short_url_domain.starts_with("https://")
        {
            anyhow::bail!(
                "SHORT_URL_DOMAIN must start with 'http://' or 'https://', got '{}'",
                self.short_url_domain
            );
        }

        if self.snapshot_path.as_os_str().is_empty() {
            anyhow::bail!("SNAPSHOT_PATH must not be empty");
        }

        if self.snapshot_interval_secs == 0 {
            anyhow::bail!("SNAPSHOT_INTERVAL_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn snapshot_interval(&self) -> Duration {
        Duration::from_secs(self.snapshot_interval_secs)
    }

    pub fn save_failure_policy(&self) -> SaveFailurePolicy {
        if self.snapshot_fail_fast {
            SaveFailurePolicy::Abort
        } else {
            SaveFailurePolicy::Continue
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short URL domain: {}", self.short_url_domain);
        tracing::info!("  Snapshot path: {}", self.snapshot_path.display());
        tracing::info!("  Snapshot interval: {}s", self.snapshot_interval_secs);
        tracing::info!("  Snapshot failure policy: {:?}", self.save_failure_policy());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
