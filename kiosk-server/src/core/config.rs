use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./kiosk-data | Work directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Fallback when RUST_LOG is unset |
/// | LOG_JSON | false | JSON log lines |
/// | SESSION_TIMEOUT_SECS | 86400 | Admin session lifetime |
/// | PAIRING_TIMEOUT_SECS | 30 | Pairing window lifetime after the last open |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
/// | MAX_IMAGE_BYTES | 10485760 | Largest decoded image upload |
/// | IMAGE_MAX_DIMENSION | 360 | Stored images fit inside this square |
/// | JPEG_QUALITY | 85 | Quality of stored JPEGs |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/kiosk HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding `database/` and `logs/`
    pub work_dir: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub session_timeout_secs: i64,
    pub pairing_timeout_secs: i64,
    pub request_timeout_ms: u64,
    pub max_image_bytes: usize,
    pub image_max_dimension: u32,
    pub jpeg_quality: u8,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./kiosk-data".into()),
            http_port: env_or("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", false),
            session_timeout_secs: env_or("SESSION_TIMEOUT_SECS", 60 * 60 * 24),
            pairing_timeout_secs: env_or("PAIRING_TIMEOUT_SECS", 30),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30_000),
            max_image_bytes: env_or("MAX_IMAGE_BYTES", 10 * 1024 * 1024),
            image_max_dimension: env_or("IMAGE_MAX_DIMENSION", 360),
            jpeg_quality: env_or("JPEG_QUALITY", 85),
        }
    }

    /// Override the work directory and port
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Path handed to the RocksDB engine
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("kiosk.db")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create `database/` and `logs/` under the work directory
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Cookies carry `Secure` everywhere except development
    pub fn secure_cookies(&self) -> bool {
        !self.is_development()
    }

    /// Request body limit: base64 inflates the image by 4/3, plus room for the JSON around it
    pub fn body_limit(&self) -> usize {
        self.max_image_bytes / 3 * 4 + 64 * 1024
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
