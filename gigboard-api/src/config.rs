/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `REQUEST_TIMEOUT_SECS`: Per-request timeout, at least 1 (default: 30)
/// - `DATABASE_URL`: SQLite connection string (default: sqlite::memory:)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size for file databases (default: 10)
/// - `SEED_ENABLED`: Load fixtures at startup (default: true)
/// - `SEED_FILE`: Fixture document to load instead of the built-in one
/// - `LOG_FORMAT`: `text` or `json` (default: text)
/// - `RUST_LOG`: Log filter
///
/// # Example
///
/// ```no_run
/// use gigboard_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use gigboard_shared::db::pool::IN_MEMORY_URL;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Startup fixtures
    pub seed: SeedConfig,

    /// Log output
    pub log: LogConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; `*` allows any
    pub cors_origins: Vec<String>,

    /// Requests running longer than this are answered with 408
    pub request_timeout_secs: u64,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

/// Seed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether fixtures are loaded at startup
    pub enabled: bool,

    /// Fixture document path; None uses the built-in fixtures
    pub file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                cors_origins: vec!["*".to_string()],
                request_timeout_secs: 30,
            },
            database: DatabaseConfig {
                url: IN_MEMORY_URL.to_string(),
                max_connections: 10,
            },
            seed: SeedConfig {
                enabled: true,
                file: None,
            },
            log: LogConfig { json: false },
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Every variable has a default, so an empty environment yields an
    /// in-memory database seeded with the built-in fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let api_host = env::var("API_HOST").unwrap_or(defaults.api.host);
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| defaults.api.port.to_string())
            .parse::<u16>()?;

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => parse_list(&raw),
            Err(_) => defaults.api.cors_origins,
        };

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => defaults.api.request_timeout_secs,
        };

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database.url);

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| defaults.database.max_connections.to_string())
            .parse::<u32>()?;

        let seed_enabled = match env::var("SEED_ENABLED") {
            Ok(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow::anyhow!("SEED_ENABLED must be true or false, got '{}'", raw))?,
            Err(_) => defaults.seed.enabled,
        };

        let seed_file = env::var("SEED_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_json = match env::var("LOG_FORMAT") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => true,
                "text" | "" => false,
                other => anyhow::bail!("LOG_FORMAT must be text or json, got '{}'", other),
            },
            Err(_) => defaults.log.json,
        };

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
                request_timeout_secs,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            seed: SeedConfig {
                enabled: seed_enabled,
                file: seed_file,
            },
            log: LogConfig { json: log_json },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Pool settings for the shared database layer
    pub fn pool_config(&self) -> gigboard_shared::db::pool::DatabaseConfig {
        gigboard_shared::db::pool::DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            ..Default::default()
        }
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// A zero timeout would answer 408 to every request
fn parse_timeout(raw: &str) -> anyhow::Result<u64> {
    let secs = raw.trim().parse::<u64>().map_err(|e| {
        anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a number of seconds, got '{}': {}", raw, e)
    })?;

    if secs == 0 {
        anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
    }

    Ok(secs)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
