//! Read-only aggregate queries across employees and attendance.
//!
//! # Invariants
//! - Each query is one SQL statement, so every figure it returns comes from
//!   the same read snapshot.
//! - Nothing is cached; every call recounts.

use crate::model::attendance::AttendanceStatus;
use crate::model::stats::{EmployeeSummary, EmployeeTotals};
use crate::repo::employee_repo::parse_employee_row;
use crate::repo::error::RepoResult;
use crate::repo::{ensure_connection_ready, to_count};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Raw dashboard counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total_employees: u64,
    pub present: u64,
    pub absent: u64,
    pub departments: u64,
}

/// Store interface for aggregate reads.
pub trait AggregationRepository {
    fn dashboard_counts(&self, day: NaiveDate) -> RepoResult<DashboardCounts>;
    /// Returns `None` when the employee does not exist.
    fn employee_totals(&self, employee_id: &str) -> RepoResult<Option<EmployeeTotals>>;
    /// Every employee with totals, in employee list order.
    fn employee_directory(&self) -> RepoResult<Vec<EmployeeSummary>>;
}

/// SQLite-backed aggregate queries.
pub struct SqliteAggregationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAggregationRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["employees", "attendance"])?;
        Ok(Self { conn })
    }
}

impl AggregationRepository for SqliteAggregationRepository<'_> {
    fn dashboard_counts(&self, day: NaiveDate) -> RepoResult<DashboardCounts> {
        let (total, present, absent, departments) = self.conn.query_row(
            "SELECT
                (SELECT COUNT(*) FROM employees),
                (SELECT COUNT(*) FROM attendance WHERE date = ?1 AND status = ?2),
                (SELECT COUNT(*) FROM attendance WHERE date = ?1 AND status = ?3),
                (SELECT COUNT(DISTINCT department) FROM employees);",
            params![
                day,
                AttendanceStatus::Present.as_str(),
                AttendanceStatus::Absent.as_str(),
            ],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            },
        )?;

        Ok(DashboardCounts {
            total_employees: to_count(total, "employee")?,
            present: to_count(present, "present")?,
            absent: to_count(absent, "absent")?,
            departments: to_count(departments, "department")?,
        })
    }

    fn employee_totals(&self, employee_id: &str) -> RepoResult<Option<EmployeeTotals>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                COALESCE(SUM(a.status = 'Present'), 0) AS present_count,
                COALESCE(SUM(a.status = 'Absent'), 0) AS absent_count
             FROM employees e
             LEFT JOIN attendance a ON a.employee_id = e.employee_id
             WHERE e.employee_id = ?1
             GROUP BY e.employee_id;",
        )?;
        let totals = stmt
            .query_row([employee_id], |row| Ok(parse_totals(row)))
            .optional()?;
        totals.transpose()
    }

    fn employee_directory(&self) -> RepoResult<Vec<EmployeeSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                e.employee_id AS employee_id,
                e.full_name AS full_name,
                e.email AS email,
                e.department AS department,
                e.created_at AS created_at,
                COALESCE(SUM(a.status = 'Present'), 0) AS present_count,
                COALESCE(SUM(a.status = 'Absent'), 0) AS absent_count
             FROM employees e
             LEFT JOIN attendance a ON a.employee_id = e.employee_id
             GROUP BY e.employee_id
             ORDER BY e.full_name COLLATE NOCASE ASC, e.employee_id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut summaries = Vec::new();
        while let Some(row) = rows.next()? {
            summaries.push(EmployeeSummary {
                employee: parse_employee_row(row)?,
                totals: parse_totals(row)?,
            });
        }
        Ok(summaries)
    }
}

fn parse_totals(row: &Row<'_>) -> RepoResult<EmployeeTotals> {
    Ok(EmployeeTotals {
        present_count: to_count(row.get("present_count")?, "present")?,
        absent_count: to_count(row.get("absent_count")?, "absent")?,
    })
}
