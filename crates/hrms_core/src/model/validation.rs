//! Field validation failures shared by employee and attendance inputs.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input rejected before any persistence attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty after trimming.
    Empty { field: &'static str },
    /// Field exceeds its maximum length in characters.
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// Email is not of the `local@domain.tld` shape.
    InvalidEmail(String),
    /// Attendance status is not `Present` or `Absent`.
    InvalidStatus(String),
    /// Calendar date outside the four-digit year range.
    DateOutOfRange(NaiveDate),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } => field,
            Self::InvalidEmail(_) => "email",
            Self::InvalidStatus(_) => "status",
            Self::DateOutOfRange(_) => "date",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} is required"),
            Self::TooLong { field, max, actual } => write!(
                f,
                "{field} must be {max} characters or less, got {actual}"
            ),
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
            Self::InvalidStatus(value) => {
                write!(f, "invalid attendance status `{value}`; expected Present|Absent")
            }
            Self::DateOutOfRange(date) => {
                write!(f, "date {date} is outside 0001-01-01..=9999-12-31")
            }
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and checks it is non-empty and at most `max` characters.
pub(crate) fn required_trimmed(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{required_trimmed, ValidationError};

    #[test]
    fn required_trimmed_strips_whitespace() {
        assert_eq!(required_trimmed("department", "  Ops \n", 10).unwrap(), "Ops");
    }

    #[test]
    fn required_trimmed_counts_chars_not_bytes() {
        assert!(required_trimmed("full_name", "Zoë Ångström", 12).is_ok());
        let err = required_trimmed("full_name", "Zoë Ångström", 11).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "full_name",
                max: 11,
                actual: 12,
            }
        );
    }

    #[test]
    fn whitespace_only_is_empty() {
        let err = required_trimmed("employee_id", "   ", 50).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "employee_id" });
        assert_eq!(err.field(), "employee_id");
    }
}
