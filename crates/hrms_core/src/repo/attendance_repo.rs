//! Attendance store contract and SQLite implementation.
//!
//! # Responsibility
//! - Own per-day attendance marks.
//! - Check that the referenced employee exists inside the write transaction.
//!
//! # Invariants
//! - Marking an already-marked `(employee_id, date)` overwrites the status
//!   in place and keeps the record id (upsert).
//! - The upsert is a single `INSERT .. ON CONFLICT` statement, so concurrent
//!   marks of one slot leave exactly one row.
//! - Only four-digit-year dates are written, so text order is date order.
//! - Per-employee listings are `date DESC`; per-date listings are
//!   `employee_id ASC`.

use crate::model::attendance::{
    validate_date, AttendanceEntry, AttendanceRecord, AttendanceStatus,
};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::{begin_write, employee_exists, ensure_connection_ready, to_count};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use uuid::Uuid;

const ATTENDANCE_SELECT_SQL: &str = "SELECT
    id,
    employee_id,
    date,
    status
FROM attendance";

/// Filters for the combined attendance listing. Both are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceListQuery {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Store interface for attendance marks.
pub trait AttendanceRepository {
    /// Creates or overwrites the mark for one employee and day.
    fn mark_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> RepoResult<AttendanceRecord>;
    fn get_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> RepoResult<Option<AttendanceRecord>>;
    /// Marks of one employee, most recent first, optionally for one day.
    fn list_by_employee(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> RepoResult<Vec<AttendanceRecord>>;
    /// Marks of one day ordered by employee id.
    fn list_by_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>>;
    /// Marks joined with employee names, `date DESC, employee_id ASC`.
    fn list_attendance(&self, query: &AttendanceListQuery) -> RepoResult<Vec<AttendanceEntry>>;
    fn count_by_status(&self, date: NaiveDate, status: AttendanceStatus) -> RepoResult<u64>;
    fn count_by_employee_and_status(
        &self,
        employee_id: &str,
        status: AttendanceStatus,
    ) -> RepoResult<u64>;
}

/// SQLite-backed attendance store.
pub struct SqliteAttendanceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAttendanceRepository<'conn> {
    /// Wraps a connection opened through [`crate::db::open_db`].
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["employees", "attendance"])?;
        Ok(Self { conn })
    }
}

impl AttendanceRepository for SqliteAttendanceRepository<'_> {
    fn mark_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> RepoResult<AttendanceRecord> {
        let date = validate_date(date)?;
        let tx = begin_write(self.conn)?;
        if !employee_exists(&tx, employee_id)? {
            return Err(RepoError::EmployeeNotFound(employee_id.to_string()));
        }

        tx.execute(
            "INSERT INTO attendance (id, employee_id, date, status)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (employee_id, date) DO UPDATE SET
                status = excluded.status,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                Uuid::new_v4().to_string(),
                employee_id,
                date,
                status.as_str(),
            ],
        )?;

        let record = load_attendance(&tx, employee_id, date)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "attendance for `{employee_id}` on {date} missing after upsert"
            ))
        })?;
        tx.commit()?;
        Ok(record)
    }

    fn get_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> RepoResult<Option<AttendanceRecord>> {
        load_attendance(self.conn, employee_id, date)
    }

    fn list_by_employee(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> RepoResult<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ATTENDANCE_SELECT_SQL}
             WHERE employee_id = ?1
               AND (?2 IS NULL OR date = ?2)
             ORDER BY date DESC;"
        ))?;
        let mut rows = stmt.query(params![employee_id, date])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_attendance_row(row)?);
        }
        Ok(records)
    }

    fn list_by_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ATTENDANCE_SELECT_SQL}
             WHERE date = ?1
             ORDER BY employee_id ASC;"
        ))?;
        let mut rows = stmt.query([date])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_attendance_row(row)?);
        }
        Ok(records)
    }

    fn list_attendance(&self, query: &AttendanceListQuery) -> RepoResult<Vec<AttendanceEntry>> {
        let mut sql = String::from(
            "SELECT
                a.id AS id,
                a.employee_id AS employee_id,
                a.date AS date,
                a.status AS status,
                e.full_name AS employee_name
             FROM attendance a
             INNER JOIN employees e ON e.employee_id = a.employee_id
             WHERE 1 = 1",
        );
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(employee_id) = query.employee_id.as_ref() {
            sql.push_str(" AND a.employee_id = ?");
            bind_values.push(Value::Text(employee_id.clone()));
        }
        if let Some(date) = query.date {
            sql.push_str(" AND a.date = ?");
            bind_values.push(Value::Text(date_to_db(date)));
        }
        sql.push_str(" ORDER BY a.date DESC, a.employee_id ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(AttendanceEntry {
                record: parse_attendance_row(row)?,
                employee_name: row.get("employee_name")?,
            });
        }
        Ok(entries)
    }

    fn count_by_status(&self, date: NaiveDate, status: AttendanceStatus) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM attendance WHERE date = ?1 AND status = ?2;",
            params![date, status.as_str()],
            |row| row.get(0),
        )?;
        to_count(count, "attendance")
    }

    fn count_by_employee_and_status(
        &self,
        employee_id: &str,
        status: AttendanceStatus,
    ) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM attendance WHERE employee_id = ?1 AND status = ?2;",
            params![employee_id, status.as_str()],
            |row| row.get(0),
        )?;
        to_count(count, "attendance")
    }
}

fn load_attendance(
    conn: &Connection,
    employee_id: &str,
    date: NaiveDate,
) -> RepoResult<Option<AttendanceRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{ATTENDANCE_SELECT_SQL} WHERE employee_id = ?1 AND date = ?2;"
    ))?;
    let row = stmt
        .query_row(params![employee_id, date], |row| {
            Ok(parse_attendance_row(row))
        })
        .optional()?;
    row.transpose()
}

fn parse_attendance_row(row: &Row<'_>) -> RepoResult<AttendanceRecord> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in attendance.id"))
    })?;

    let status_text: String = row.get("status")?;
    let status = status_text.parse::<AttendanceStatus>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in attendance.status"
        ))
    })?;

    Ok(AttendanceRecord {
        id,
        employee_id: row.get("employee_id")?,
        date: row.get("date")?,
        status,
    })
}

// Same text form rusqlite's chrono support writes for `NaiveDate`.
fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
