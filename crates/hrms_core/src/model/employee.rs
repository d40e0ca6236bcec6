//! Employee records and creation input.
//!
//! # Responsibility
//! - Define the persisted employee shape and its creation payload.
//! - Normalize and validate creation input before it reaches storage.
//!
//! # Invariants
//! - `employee_id` is the primary identity and never changes after creation.
//! - Emails are stored trimmed and lowercased, so uniqueness is
//!   case-insensitive.

use crate::model::validation::{required_trimmed, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const EMPLOYEE_ID_MAX_LEN: usize = 50;
pub const FULL_NAME_MAX_LEN: usize = 100;
pub const DEPARTMENT_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 254;

// The top-level label starts with a letter; punycode (`xn--`) labels pass.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~.-]+@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z][a-z0-9-]*[a-z0-9]$",
    )
    .expect("valid email regex")
});

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Business identifier, also the primary key.
    pub employee_id: String,
    pub full_name: String,
    /// Lowercased email address.
    pub email: String,
    pub department: String,
    /// Creation time in epoch milliseconds, assigned by storage.
    pub created_at: i64,
}

/// Creation payload for one employee.
///
/// Values are taken as provided; call [`NewEmployee::normalized`] (the
/// repository does) to get the trimmed, validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl NewEmployee {
    pub fn new(
        employee_id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// Returns a trimmed copy with a lowercased email, or the first
    /// invalid field.
    ///
    /// Fields are checked in declaration order.
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        let employee_id =
            required_trimmed("employee_id", &self.employee_id, EMPLOYEE_ID_MAX_LEN)?;
        let full_name = required_trimmed("full_name", &self.full_name, FULL_NAME_MAX_LEN)?;
        let email = validate_email(&self.email)?;
        let department = required_trimmed("department", &self.department, DEPARTMENT_MAX_LEN)?;

        Ok(Self {
            employee_id,
            full_name,
            email,
            department,
        })
    }
}

/// Canonical lookup form of an email: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalizes `email` and checks it is a plausible `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let normalized = required_trimmed("email", email, EMAIL_MAX_LEN)?.to_lowercase();
    let local = normalized.split('@').next().unwrap_or_default();
    let dotted_badly = local.starts_with('.') || local.ends_with('.') || local.contains("..");
    if dotted_badly || !EMAIL_RE.is_match(&normalized) {
        return Err(ValidationError::InvalidEmail(email.trim().to_string()));
    }
    Ok(normalized)
}
