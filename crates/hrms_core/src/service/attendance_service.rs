//! Attendance use-case service.
//!
//! # Invariants
//! - Marking twice for the same day overwrites the earlier status.
//! - Employee ids are trimmed before reaching the store.

use crate::model::attendance::{
    validate_date, AttendanceEntry, AttendanceRecord, AttendanceStatus,
};
use crate::model::validation::ValidationError;
use crate::repo::attendance_repo::{AttendanceListQuery, AttendanceRepository};
use crate::repo::error::{RepoError, RepoResult};
use chrono::NaiveDate;
use log::info;

/// Attendance operations for request handlers.
pub struct AttendanceService<R: AttendanceRepository> {
    repo: R,
}

impl<R: AttendanceRepository> AttendanceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records `status` for the employee on `date`.
    ///
    /// # Errors
    /// - `Validation` when `employee_id` is blank or `date` falls outside
    ///   years 1 through 9999.
    /// - `EmployeeNotFound` when the employee does not exist; nothing is written.
    pub fn mark(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> RepoResult<AttendanceRecord> {
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return Err(ValidationError::Empty {
                field: "employee_id",
            }
            .into());
        }
        let date = validate_date(date)?;

        let record = self.repo.mark_attendance(employee_id, date, status)?;
        info!(
            "event=attendance_mark module=service status=ok employee_id={} date={} mark={}",
            record.employee_id, record.date, record.status
        );
        Ok(record)
    }

    /// Like [`Self::mark`], parsing `status` from its `Present`/`Absent` text.
    pub fn mark_str(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: &str,
    ) -> RepoResult<AttendanceRecord> {
        let status = status.parse::<AttendanceStatus>()?;
        self.mark(employee_id, date, status)
    }

    pub fn get(&self, employee_id: &str, date: NaiveDate) -> RepoResult<AttendanceRecord> {
        let employee_id = employee_id.trim();
        self.repo
            .get_attendance(employee_id, date)?
            .ok_or_else(|| RepoError::AttendanceNotFound {
                employee_id: employee_id.to_string(),
                date,
            })
    }

    pub fn list_by_employee(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> RepoResult<Vec<AttendanceRecord>> {
        self.repo.list_by_employee(employee_id.trim(), date)
    }

    pub fn list_by_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
        self.repo.list_by_date(date)
    }

    /// Lists marks with employee names; blank employee filters are ignored.
    pub fn list(
        &self,
        employee_id: Option<&str>,
        date: Option<NaiveDate>,
    ) -> RepoResult<Vec<AttendanceEntry>> {
        let query = AttendanceListQuery {
            employee_id: employee_id
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            date,
        };
        self.repo.list_attendance(&query)
    }

    pub fn count_by_status(&self, date: NaiveDate, status: AttendanceStatus) -> RepoResult<u64> {
        self.repo.count_by_status(date, status)
    }

    pub fn count_by_employee_and_status(
        &self,
        employee_id: &str,
        status: AttendanceStatus,
    ) -> RepoResult<u64> {
        self.repo
            .count_by_employee_and_status(employee_id.trim(), status)
    }
}
