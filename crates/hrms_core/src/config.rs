//! Runtime configuration read from the environment.
//!
//! | Variable             | Meaning                                  | Default                 |
//! |----------------------|------------------------------------------|-------------------------|
//! | `HRMS_DATABASE_PATH` | SQLite database file                     | `data/hrms.sqlite3`     |
//! | `DATABASE_URL`       | `sqlite://<path>` fallback for the above | unset                   |
//! | `HRMS_LOG_LEVEL`     | `trace`..`error`                         | `debug` / `info`        |
//! | `HRMS_LOG_DIR`       | absolute log directory; unset disables   | unset                   |

use crate::logging::{default_log_level, LogLevel, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "data/hrms.sqlite3";

/// Settings needed to open storage and start logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub database_path: PathBuf,
    pub log_level: LogLevel,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    /// `DATABASE_URL` is set to something other than a SQLite URL.
    UnsupportedDatabaseUrl(String),
    InvalidLogLevel(LoggingError),
    /// `HRMS_LOG_DIR` is not an absolute path.
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedDatabaseUrl(url) => {
                write!(f, "DATABASE_URL must be a sqlite:// url, got `{url}`")
            }
            Self::InvalidLogLevel(err) => write!(f, "HRMS_LOG_LEVEL: {err}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "HRMS_LOG_DIR must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
            _ => None,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup; blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = get("HRMS_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        } else if let Some(url) = get("DATABASE_URL") {
            config.database_path = sqlite_url_path(&url)
                .ok_or_else(|| ConfigError::UnsupportedDatabaseUrl(url.clone()))?;
        }

        if let Some(level) = get("HRMS_LOG_LEVEL") {
            config.log_level = LogLevel::parse(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(dir) = get("HRMS_LOG_DIR") {
            let dir = PathBuf::from(dir);
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(dir);
        }

        Ok(config)
    }
}

// `sqlite:///abs/path` keeps its leading slash; `sqlite://rel` stays relative.
fn sqlite_url_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    if rest.is_empty() {
        return None;
    }
    Some(PathBuf::from(rest))
}
