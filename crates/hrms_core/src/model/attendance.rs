//! Attendance marks.
//!
//! # Invariants
//! - One record per `(employee_id, date)`; a missing record means "not yet
//!   marked", which is distinct from an explicit `Absent`.
//! - A record's `id` survives status overwrites.
//! - Marked dates have four-digit years, so their `YYYY-MM-DD` text sorts
//!   chronologically.

use crate::model::validation::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// System-generated attendance record identifier.
pub type AttendanceId = Uuid;

/// Daily attendance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Storage and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ValidationError;

    /// Accepts exactly `Present` or `Absent`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Present" => Ok(Self::Present),
            "Absent" => Ok(Self::Absent),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// Accepts dates from 0001-01-01 through 9999-12-31.
pub fn validate_date(date: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if (1..=9999).contains(&date.year()) {
        Ok(date)
    } else {
        Err(ValidationError::DateOutOfRange(date))
    }
}

/// One employee's mark for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Attendance record joined with the owning employee's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub employee_name: String,
}
