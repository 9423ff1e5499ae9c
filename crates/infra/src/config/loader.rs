//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `MERCHPLAN_STORAGE_BACKEND` is unset, falls back to loading from file
//! 3. Searches several paths for a config file
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MERCHPLAN_STORAGE_BACKEND`: `memory`, `file` or `sqlite` (required)
//! - `MERCHPLAN_STORAGE_PATH`: Directory (file) or database path (sqlite)
//! - `MERCHPLAN_STORAGE_POOL_SIZE`: SQLite connection pool size
//! - `MERCHPLAN_FISCAL_YEAR_START`: First day of week W01 (`YYYY-MM-DD`)
//! - `MERCHPLAN_CASCADE_DELETES`: Prune planning items on delete (true/false)
//! - `MERCHPLAN_SEED_DEMO_DATA`: Seed demo stores and SKUs (true/false)
//! - `MERCHPLAN_LOG_LEVEL`: Default tracing filter directive
//! - `MERCHPLAN_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader checks the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./merchplan.json` or `./merchplan.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use merchplan_domain::{
    CalendarConfig, Config, LoggingConfig, MerchPlanError, PlanningConfig, Result, SeedConfig,
    StorageBackend, StorageConfig,
};

use crate::errors::InfraError;

const BACKEND_VAR: &str = "MERCHPLAN_STORAGE_BACKEND";

/// Load configuration with automatic fallback strategy
///
/// Environment variables win whenever `MERCHPLAN_STORAGE_BACKEND` is set;
/// otherwise the configuration is loaded from a file.
///
/// # Errors
/// Returns `MerchPlanError::Config` if:
/// - Any `MERCHPLAN_*` variable is invalid while the backend variable is set
/// - No config file is found when the backend variable is unset
/// - File format is invalid
pub fn load() -> Result<Config> {
    if env_configured() {
        return load_env_logged();
    }
    tracing::debug!("{} unset, loading configuration from file", BACKEND_VAR);
    load_from_file(None)
}

/// Like [`load`], but falls back to [`Config::default`] when neither
/// environment nor file configuration is present.
///
/// Malformed configuration is still an error.
pub fn load_or_default() -> Result<Config> {
    if env_configured() {
        return load_env_logged();
    }
    match find_config_file() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found; using in-memory defaults");
            Ok(Config::default())
        }
    }
}

/// Whether the environment selects a storage backend.
fn env_configured() -> bool {
    std::env::var_os(BACKEND_VAR).is_some()
}

fn load_env_logged() -> Result<Config> {
    let config = load_from_env()?;
    tracing::info!(backend = %config.storage.backend, "Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// `MERCHPLAN_STORAGE_BACKEND` must be present; every other variable is
/// optional and defaults to the corresponding `Config::default()` value.
///
/// # Errors
/// Returns `MerchPlanError::Config` if the backend variable is missing or
/// any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let backend = env_var(BACKEND_VAR)?.parse::<StorageBackend>().map_err(|e| {
        MerchPlanError::Config(format!("Invalid storage backend: {}", e))
    })?;
    let path = std::env::var("MERCHPLAN_STORAGE_PATH").ok().filter(|p| !p.trim().is_empty());

    let defaults = Config::default();
    let pool_size = env_parsed("MERCHPLAN_STORAGE_POOL_SIZE", "pool size", |s| s.parse::<u32>())?
        .unwrap_or(defaults.storage.pool_size);
    let fiscal_year_start =
        env_parsed("MERCHPLAN_FISCAL_YEAR_START", "fiscal year start", |s| {
            s.parse::<NaiveDate>()
        })?
        .unwrap_or(defaults.calendar.fiscal_year_start);

    Ok(Config {
        storage: StorageConfig { backend, path, pool_size },
        calendar: CalendarConfig { fiscal_year_start },
        planning: PlanningConfig {
            cascade_deletes: env_bool("MERCHPLAN_CASCADE_DELETES", defaults.planning.cascade_deletes)?,
        },
        seeding: SeedConfig { enabled: env_bool("MERCHPLAN_SEED_DEMO_DATA", defaults.seeding.enabled)? },
        logging: LoggingConfig {
            level: std::env::var("MERCHPLAN_LOG_LEVEL").unwrap_or(defaults.logging.level),
            json: env_bool("MERCHPLAN_LOG_JSON", defaults.logging.json)?,
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches several locations for a config file.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MerchPlanError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MerchPlanError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            MerchPlanError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MerchPlanError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MerchPlanError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MerchPlanError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search several paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        candidates.extend([cwd.join("../config.json"), cwd.join("../config.toml")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("merchplan.json"),
        dir.join("merchplan.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `MerchPlanError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MerchPlanError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, failing on malformed values.
fn env_parsed<T, E, F>(key: &str, what: &str, parse: F) -> Result<Option<T>>
where
    E: std::fmt::Display,
    F: FnOnce(&str) -> std::result::Result<T, E>,
{
    match std::env::var(key) {
        Ok(raw) => parse(raw.trim())
            .map(Some)
            .map_err(|e| MerchPlanError::Config(format!("Invalid {}: {}", what, e))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// An unset variable yields `default`; anything else is a config error.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    env_parsed(key, key, |s| match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    })
    .map(|value| value.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 8] = [
        "MERCHPLAN_STORAGE_BACKEND",
        "MERCHPLAN_STORAGE_PATH",
        "MERCHPLAN_STORAGE_POOL_SIZE",
        "MERCHPLAN_FISCAL_YEAR_START",
        "MERCHPLAN_CASCADE_DELETES",
        "MERCHPLAN_SEED_DEMO_DATA",
        "MERCHPLAN_LOG_LEVEL",
        "MERCHPLAN_LOG_JSON",
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("MP_TEST_BOOL_TRUE_1", "1");
        std::env::set_var("MP_TEST_BOOL_TRUE_UPPER", "TRUE");
        std::env::set_var("MP_TEST_BOOL_TRUE_ON", "on");
        std::env::set_var("MP_TEST_BOOL_FALSE_NO", "no");
        std::env::set_var("MP_TEST_BOOL_GARBAGE", "maybe");

        assert!(env_bool("MP_TEST_BOOL_TRUE_1", false).unwrap());
        assert!(env_bool("MP_TEST_BOOL_TRUE_UPPER", false).unwrap());
        assert!(env_bool("MP_TEST_BOOL_TRUE_ON", false).unwrap());
        assert!(!env_bool("MP_TEST_BOOL_FALSE_NO", true).unwrap());
        assert!(matches!(env_bool("MP_TEST_BOOL_GARBAGE", true), Err(MerchPlanError::Config(_))));

        std::env::remove_var("MP_TEST_BOOL_MISSING");
        assert!(env_bool("MP_TEST_BOOL_MISSING", true).unwrap());
        assert!(!env_bool("MP_TEST_BOOL_MISSING", false).unwrap());

        std::env::remove_var("MP_TEST_BOOL_TRUE_1");
        std::env::remove_var("MP_TEST_BOOL_TRUE_UPPER");
        std::env::remove_var("MP_TEST_BOOL_TRUE_ON");
        std::env::remove_var("MP_TEST_BOOL_FALSE_NO");
        std::env::remove_var("MP_TEST_BOOL_GARBAGE");
    }

    #[test]
    fn test_load_or_default_surfaces_bad_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MERCHPLAN_STORAGE_BACKEND", "sqllite");
        let typo = load_or_default();

        std::env::set_var("MERCHPLAN_STORAGE_BACKEND", "sqlite");
        std::env::set_var("MERCHPLAN_STORAGE_POOL_SIZE", "abc");
        let bad_pool = load_or_default();
        let bad_pool_strict = load();
        clear_env();

        assert!(matches!(typo, Err(MerchPlanError::Config(_))));
        assert!(matches!(bad_pool, Err(MerchPlanError::Config(_))));
        assert!(matches!(bad_pool_strict, Err(MerchPlanError::Config(_))));
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("MERCHPLAN_STORAGE_BACKEND", "sqlite");
        std::env::set_var("MERCHPLAN_STORAGE_PATH", "/tmp/merchplan.db");
        std::env::set_var("MERCHPLAN_STORAGE_POOL_SIZE", "8");
        std::env::set_var("MERCHPLAN_FISCAL_YEAR_START", "2025-02-02");
        std::env::set_var("MERCHPLAN_CASCADE_DELETES", "yes");
        std::env::set_var("MERCHPLAN_SEED_DEMO_DATA", "false");
        std::env::set_var("MERCHPLAN_LOG_LEVEL", "debug");
        std::env::set_var("MERCHPLAN_LOG_JSON", "1");

        let result = load_from_env();
        clear_env();
        let config = result.expect("config loads from env");

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/merchplan.db"));
        assert_eq!(config.storage.pool_size, 8);
        assert_eq!(config.calendar.fiscal_year_start, NaiveDate::from_ymd_opt(2025, 2, 2).unwrap());
        assert!(config.planning.cascade_deletes);
        assert!(!config.seeding.enabled);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("MERCHPLAN_STORAGE_BACKEND", "Memory");

        let result = load_from_env();
        clear_env();
        let config = result.expect("config loads from env");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_env_missing_backend() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, MerchPlanError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MERCHPLAN_STORAGE_BACKEND", "postgres");
        assert!(matches!(load_from_env(), Err(MerchPlanError::Config(_))));

        std::env::set_var("MERCHPLAN_STORAGE_BACKEND", "file");
        std::env::set_var("MERCHPLAN_STORAGE_POOL_SIZE", "many");
        assert!(matches!(load_from_env(), Err(MerchPlanError::Config(_))));

        std::env::remove_var("MERCHPLAN_STORAGE_POOL_SIZE");
        std::env::set_var("MERCHPLAN_FISCAL_YEAR_START", "02/04/2024");
        assert!(matches!(load_from_env(), Err(MerchPlanError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "storage": { "backend": "file", "path": "data" },
            "planning": { "cascade_deletes": true }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();
        let config = result.expect("Should load config from JSON file");

        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path.as_deref(), Some("data"));
        assert!(config.planning.cascade_deletes);
        assert!(config.seeding.enabled);
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[storage]
backend = "sqlite"
path = "merchplan.db"
pool_size = 6

[calendar]
fiscal_year_start = "2025-02-02"

[seeding]
enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();
        let config = result.expect("Should load config from TOML file");

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.pool_size, 6);
        assert_eq!(config.calendar.fiscal_year_start, NaiveDate::from_ymd_opt(2025, 2, 2).unwrap());
        assert!(!config.seeding.enabled);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(MerchPlanError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let invalid_json = r#"{ "storage": { "backend": "floppy" } "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_json.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_parse_config_toml_errors_are_config_errors() {
        let result = parse_config("[storage\nbackend = 1", &PathBuf::from("bad.toml"));
        assert!(matches!(result, Err(MerchPlanError::Config(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("storage: {}", &PathBuf::from("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
