/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DATABASE_PATH | {WORK_DIR}/mesa.db | SQLite database file |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | Log level when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | Enables a daily rolling log file in this directory |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
/// | PRINT_TIMEOUT_MS | 10000 | Timeout for printer shell commands |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/mesa HTTP_PORT=8080 cargo run -p mesa-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the database and logs
    pub work_dir: String,
    /// SQLite database file
    pub database_path: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default log level
    pub log_level: String,
    /// Log file directory (stdout only when unset)
    pub log_dir: Option<String>,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
    /// Printer command timeout (ms)
    pub print_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let work_dir = lookup("WORK_DIR").unwrap_or_else(|| "./data".into());
        let database_path = lookup("DATABASE_PATH")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| format!("{}/mesa.db", work_dir.trim_end_matches('/')));

        Self {
            database_path,
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            request_timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            print_timeout_ms: lookup("PRINT_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            work_dir,
        }
    }

    /// Override the working directory and port
    ///
    /// Commonly used in tests; the database follows the new working directory.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_path = format!("{}/mesa.db", config.work_dir.trim_end_matches('/'));
        config.http_port = http_port;
        config
    }

    /// Production environment?
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Development environment?
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
