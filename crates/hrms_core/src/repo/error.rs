//! Failure kinds surfaced by the stores.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Which uniqueness rule a write violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    EmployeeId(String),
    Email(String),
}

/// Coarse classification callers map onto their own responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    ValidationFailed,
    Storage,
}

/// Error for store and service operations.
#[derive(Debug)]
pub enum RepoError {
    /// Input rejected before persistence.
    Validation(ValidationError),
    /// A uniqueness constraint rejected the write.
    Conflict(ConflictKind),
    EmployeeNotFound(String),
    EmployeeEmailNotFound(String),
    AttendanceNotFound {
        employee_id: String,
        date: NaiveDate,
    },
    Db(DbError),
    /// Connection schema is not at the version this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    /// Stored data cannot be mapped back to a domain record.
    InvalidData(String),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::EmployeeNotFound(_)
            | Self::EmployeeEmailNotFound(_)
            | Self::AttendanceNotFound { .. } => ErrorKind::NotFound,
            Self::Db(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::InvalidData(_) => ErrorKind::Storage,
        }
    }

    /// Short stable code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::Conflict(ConflictKind::EmployeeId(_)) => "duplicate_employee_id",
            Self::Conflict(ConflictKind::Email(_)) => "duplicate_email",
            Self::EmployeeNotFound(_) | Self::EmployeeEmailNotFound(_) => "employee_not_found",
            Self::AttendanceNotFound { .. } => "attendance_not_found",
            Self::Db(_) => "db_error",
            Self::UninitializedConnection { .. } => "uninitialized_connection",
            Self::MissingRequiredTable(_) => "missing_table",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict(ConflictKind::EmployeeId(id)) => {
                write!(f, "employee with id `{id}` already exists")
            }
            Self::Conflict(ConflictKind::Email(email)) => {
                write!(f, "employee with email `{email}` already exists")
            }
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::EmployeeEmailNotFound(email) => {
                write!(f, "employee not found for email: {email}")
            }
            Self::AttendanceNotFound { employee_id, date } => {
                write!(f, "no attendance for employee {employee_id} on {date}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "store requires table `{table}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
