//! Logging bootstrap and configuration.
//!
//! # Responsibility
//! - Turn level/directory settings into a validated `LoggingConfig`.
//! - Start the rolling file logger at most once per process.
//!
//! # Invariants
//! - Catalog events are metadata-only (`event=... module=... status=...`);
//!   names and titles are never written to logs.
//! - Re-initialization with a different level or directory is rejected.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::env::VarError;
use std::path::{Path, PathBuf};

/// Environment variable read by `LoggingConfig::from_env` for the level.
pub const LOG_LEVEL_ENV: &str = "MAGAZINE_LOG_LEVEL";
/// Environment variable read by `LoggingConfig::from_env` for the directory.
pub const LOG_DIR_ENV: &str = "MAGAZINE_LOG_DIR";

const LOG_FILE_BASENAME: &str = "magazine";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    config: LoggingConfig,
    _logger: LoggerHandle,
}

/// Logging setup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
    /// Environment variable is set but not valid UTF-8.
    NonUnicodeEnv(&'static str),
    /// Directory creation or logger backend start failed.
    Backend(String),
    /// Logging already runs with a different configuration.
    Conflict { active: String, requested: String },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
            Self::NonUnicodeEnv(name) => write!(f, "`{name}` is not valid UTF-8"),
            Self::Backend(message) => write!(f, "logger backend failed: {message}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already initialized with {active}; refusing to switch to {requested}"
            ),
        }
    }
}

impl Error for LoggingError {}

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    level: &'static str,
    log_dir: PathBuf,
}

impl LoggingConfig {
    /// Normalizes `level` (case-insensitive, `warning` accepted) and checks
    /// that `log_dir` is a non-empty absolute path.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, LoggingError> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Reads `MAGAZINE_LOG_LEVEL` and `MAGAZINE_LOG_DIR`.
    ///
    /// Returns `Ok(None)` when no directory is configured; an unset level
    /// falls back to `default_log_level()`.
    ///
    /// # Errors
    /// - `LoggingError::NonUnicodeEnv` when either variable is not UTF-8.
    pub fn from_env() -> Result<Option<Self>, LoggingError> {
        Self::from_env_values(std::env::var(LOG_LEVEL_ENV), std::env::var(LOG_DIR_ENV))
    }

    fn from_env_values(
        level: Result<String, VarError>,
        log_dir: Result<String, VarError>,
    ) -> Result<Option<Self>, LoggingError> {
        let log_dir = match log_dir {
            Ok(value) => value,
            Err(VarError::NotPresent) => return Ok(None),
            Err(VarError::NotUnicode(_)) => {
                return Err(LoggingError::NonUnicodeEnv(LOG_DIR_ENV))
            }
        };
        let level = match level {
            Ok(value) => value,
            Err(VarError::NotPresent) => default_log_level().to_string(),
            Err(VarError::NotUnicode(_)) => {
                return Err(LoggingError::NonUnicodeEnv(LOG_LEVEL_ENV))
            }
        };
        Self::new(&level, &log_dir).map(Some)
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    fn describe(&self) -> String {
        format!("level `{}` at `{}`", self.level, self.log_dir.display())
    }
}

/// Starts file logging for `config`.
///
/// Idempotent for an identical config.
///
/// # Errors
/// - `LoggingError::Conflict` when already running with another config.
/// - `LoggingError::Backend` when the directory or logger cannot be set up.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let state = LOGGING_STATE.get_or_try_init(|| start_logger(config))?;
    if state.config != *config {
        return Err(LoggingError::Conflict {
            active: state.config.describe(),
            requested: config.describe(),
        });
    }
    Ok(())
}

/// Active logging config, or `None` before `init_logging` succeeded.
pub fn logging_status() -> Option<LoggingConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &LoggingConfig) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        LoggingError::Backend(format!(
            "failed to create log directory `{}`: {err}",
            config.log_dir.display()
        ))
    })?;

    let logger = Logger::try_with_str(config.level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    info!(
        "event=logging_init module=core status=ok level={} version={}",
        config.level,
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config: config.clone(),
        _logger: logger,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
        LOG_DIR_ENV, LOG_LEVEL_ENV,
    };
    use std::env::VarError;
    use std::ffi::OsString;

    #[test]
    fn env_values_without_dir_disable_file_logging() {
        let config =
            LoggingConfig::from_env_values(Ok("info".to_string()), Err(VarError::NotPresent))
                .expect("unset dir is not an error");
        assert_eq!(config, None);
    }

    #[test]
    fn env_values_fall_back_to_default_level() {
        let log_dir = Ok("/tmp/magazine-logs".to_string());
        let config = LoggingConfig::from_env_values(Err(VarError::NotPresent), log_dir)
            .expect("valid env")
            .expect("dir configured");
        assert_eq!(config.level(), default_log_level());
    }

    #[test]
    fn env_values_reject_non_unicode_dir_and_level() {
        let not_unicode = || VarError::NotUnicode(OsString::from("bad"));

        let err = LoggingConfig::from_env_values(Ok("info".to_string()), Err(not_unicode()))
            .expect_err("non-UTF-8 dir must be reported");
        assert_eq!(err, LoggingError::NonUnicodeEnv(LOG_DIR_ENV));

        let log_dir = Ok("/tmp/magazine-logs".to_string());
        let err = LoggingConfig::from_env_values(Err(not_unicode()), log_dir)
            .expect_err("non-UTF-8 level must be reported");
        assert_eq!(err, LoggingError::NonUnicodeEnv(LOG_LEVEL_ENV));
    }

    #[test]
    fn config_normalizes_level_aliases() {
        let config = LoggingConfig::new(" WARNING ", "/tmp/magazine-logs").expect("valid config");
        assert_eq!(config.level(), "warn");
    }

    #[test]
    fn config_rejects_relative_and_empty_dirs() {
        let err = LoggingConfig::new("info", "logs/dev").expect_err("relative dir");
        assert_eq!(err, LoggingError::RelativeLogDir("logs/dev".to_string()));

        let err = LoggingConfig::new("info", "   ").expect_err("empty dir");
        assert_eq!(err, LoggingError::EmptyLogDir);
    }

    #[test]
    fn config_rejects_unknown_level() {
        let err = LoggingConfig::new("verbose", "/tmp/magazine-logs").expect_err("bad level");
        assert!(err.to_string().contains("unsupported log level"));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let first_dir = tempfile::tempdir().expect("temp dir");
        let second_dir = tempfile::tempdir().expect("temp dir");
        let first_path = first_dir.path().to_str().expect("utf-8 path");
        let second_path = second_dir.path().to_str().expect("utf-8 path");

        let config = LoggingConfig::new("info", first_path).expect("valid config");
        init_logging(&config).expect("first init should succeed");
        init_logging(&config).expect("same config should be idempotent");

        let level_conflict = LoggingConfig::new("debug", first_path).expect("valid config");
        let err = init_logging(&level_conflict).expect_err("level conflict should fail");
        assert!(err.to_string().contains("refusing to switch"));

        let dir_conflict = LoggingConfig::new("info", second_path).expect("valid config");
        let err = init_logging(&dir_conflict).expect_err("dir conflict should fail");
        assert!(matches!(err, LoggingError::Conflict { .. }));

        assert_eq!(logging_status(), Some(config));
    }
}
