use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const CONFIG_DIR: &str = "config";

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Database connection URL. There is no default: startup fails without it.
    #[validate(length(min = 1))]
    pub database_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Create missing tables on startup
    #[serde(default = "default_true_bool")]
    pub auto_create_schema: bool,

    /// CORS: comma-separated list of allowed origins
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Allow permissive CORS outside development
    #[serde(default)]
    pub cors_allow_any_origin: bool,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    #[validate(range(min = 1))]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB timeouts (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_idle_timeout_secs")]
    pub db_idle_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Creates a configuration with defaults for everything but the database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            auto_create_schema: true,
            cors_allowed_origins: None,
            cors_allow_any_origin: false,
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_idle_timeout_secs: default_db_idle_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
        }
    }

    /// Gets database URL reference
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Gets log level reference
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Checks if running in development environment
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Explicitly configured CORS origins, empty entries dropped
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether we should fall back to permissive CORS
    pub fn should_allow_permissive_cors(&self) -> bool {
        self.is_development() || self.cors_allow_any_origin
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid CORS configuration: {0}")]
    Cors(String),
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_true_bool() -> bool {
    true
}

fn default_db_max_connections() -> u32 {
    10
}
fn default_db_min_connections() -> u32 {
    1
}
fn default_db_connect_timeout_secs() -> u64 {
    30
}
fn default_db_idle_timeout_secs() -> u64 {
    600
}
fn default_db_acquire_timeout_secs() -> u64 {
    8
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!(
        "dairy_sales_api={level},seed_data={level},tower_http=debug,sea_orm=warn,sqlx=warn"
    );
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. `DATABASE_URL` from the process environment or `.env`
/// 5. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    // A missing .env file is fine; the variables may come from the process
    let _ = dotenvy::dotenv();

    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    load_config_from(Path::new(CONFIG_DIR), &run_env, env::var("DATABASE_URL").ok())
}

/// Loads configuration from `dir` for the `run_env` profile. `database_url`
/// is the plain `DATABASE_URL` value, layered below `APP__DATABASE_URL`.
pub fn load_config_from(
    dir: &Path,
    run_env: &str,
    database_url: Option<String>,
) -> Result<AppConfig, AppConfigError> {
    if !dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            dir.display()
        );
    }

    let mut builder = Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", DEFAULT_PORT)?
        .set_default("environment", run_env)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::from(dir.join("default")).required(false))
        .add_source(File::from(dir.join(run_env)).required(false));

    if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
        builder = builder.set_override("database_url", url)?;
    }

    let config = builder
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    // Check for database_url before deserialization to provide a clear error message
    if config.get_string("database_url").is_err() {
        error!("Database URL is not configured. Set DATABASE_URL (or APP__DATABASE_URL) in the environment or .env file.");
        return Err(AppConfigError::Load(ConfigError::NotFound(
            "database_url is required but not configured. Set DATABASE_URL.".into(),
        )));
    }

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn missing_database_url_is_fatal() {
        let dir = config_dir(&[]);
        let result = load_config_from(dir.path(), "test", None);
        assert_matches!(result, Err(AppConfigError::Load(ConfigError::NotFound(_))));
    }

    #[test]
    fn blank_database_url_is_treated_as_missing() {
        let dir = config_dir(&[]);
        let result = load_config_from(dir.path(), "test", Some("   ".into()));
        assert!(result.is_err());
    }

    #[test]
    fn database_url_from_environment() {
        let dir = config_dir(&[]);
        let cfg = load_config_from(dir.path(), "test", Some("sqlite::memory:".into())).unwrap();
        assert_eq!(cfg.database_url(), "sqlite::memory:");
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.environment, "test");
        assert!(cfg.auto_create_schema);
    }

    #[test]
    fn files_are_layered_by_profile() {
        let dir = config_dir(&[
            (
                "default.toml",
                "database_url = \"postgres://localhost/default\"\nport = 9000\nlog_level = \"debug\"\n",
            ),
            ("staging.toml", "port = 9100\n"),
        ]);

        let cfg = load_config_from(dir.path(), "staging", None).unwrap();
        assert_eq!(cfg.database_url(), "postgres://localhost/default");
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn environment_url_overrides_files() {
        let dir = config_dir(&[(
            "default.toml",
            "database_url = \"postgres://localhost/default\"\n",
        )]);
        let cfg = load_config_from(
            dir.path(),
            "test",
            Some("postgres://db.internal/sales".into()),
        )
        .unwrap();
        assert_eq!(cfg.database_url(), "postgres://db.internal/sales");
    }

    #[test]
    fn shipped_profiles_create_missing_tables() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_DIR);
        for profile in ["development", "production"] {
            let cfg =
                load_config_from(&dir, profile, Some("postgres://localhost/ventas".into())).unwrap();
            assert!(cfg.auto_create_schema, "{profile} skips table creation");
        }

        let production =
            load_config_from(&dir, "production", Some("postgres://localhost/ventas".into()))
                .unwrap();
        assert!(production.log_json);
    }

    #[test]
    fn invalid_log_level_fails_validation() {
        let dir = config_dir(&[(
            "default.toml",
            "database_url = \"sqlite::memory:\"\nlog_level = \"loud\"\n",
        )]);
        let result = load_config_from(dir.path(), "test", None);
        assert_matches!(result, Err(AppConfigError::Validation(_)));
    }

    #[test]
    fn cors_origins_skip_blank_entries() {
        let mut cfg = AppConfig::new("sqlite::memory:");
        cfg.cors_allowed_origins = Some("https://a.example, ,https://b.example".into());
        assert_eq!(
            cfg.cors_origins(),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn permissive_cors_only_in_development_or_opt_in() {
        let mut cfg = AppConfig::new("sqlite::memory:");
        assert!(cfg.should_allow_permissive_cors());

        cfg.environment = "production".into();
        assert!(!cfg.should_allow_permissive_cors());

        cfg.cors_allow_any_origin = true;
        assert!(cfg.should_allow_permissive_cors());
    }
}
