//! Employee store contract and SQLite implementation.
//!
//! # Responsibility
//! - Own employee identity and the `employee_id` / `email` uniqueness rules.
//! - Remove an employee together with all of its attendance rows.
//!
//! # Invariants
//! - `create_employee` normalizes and validates before any SQL runs.
//! - Uniqueness is checked inside the same write transaction as the insert;
//!   a constraint failure that still slips through maps to the same conflict.
//! - `delete_employee` never leaves orphaned attendance rows.

use crate::model::employee::{normalize_email, Employee, NewEmployee};
use crate::repo::error::{ConflictKind, RepoError, RepoResult};
use crate::repo::{begin_write, employee_exists, ensure_connection_ready, to_count};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    employee_id,
    full_name,
    email,
    department,
    created_at
FROM employees";

/// Store interface for employee records.
pub trait EmployeeRepository {
    /// Inserts one employee and returns the stored row.
    fn create_employee(&self, employee: &NewEmployee) -> RepoResult<Employee>;
    fn get_employee(&self, employee_id: &str) -> RepoResult<Option<Employee>>;
    /// Case-insensitive lookup by email.
    fn get_employee_by_email(&self, email: &str) -> RepoResult<Option<Employee>>;
    /// All employees ordered by name, then id.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    /// Deletes the employee and its attendance rows; returns how many
    /// attendance rows went with it.
    fn delete_employee(&self, employee_id: &str) -> RepoResult<usize>;
    fn count_employees(&self) -> RepoResult<u64>;
    fn count_distinct_departments(&self) -> RepoResult<u64>;
}

/// SQLite-backed employee store.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a connection opened through [`crate::db::open_db`].
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["employees", "attendance"])?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, employee: &NewEmployee) -> RepoResult<Employee> {
        let employee = employee.normalized()?;

        let tx = begin_write(self.conn)?;
        if employee_exists(&tx, &employee.employee_id)? {
            return Err(RepoError::Conflict(ConflictKind::EmployeeId(
                employee.employee_id,
            )));
        }
        if load_employee_by_email(&tx, &employee.email)?.is_some() {
            return Err(RepoError::Conflict(ConflictKind::Email(employee.email)));
        }

        tx.execute(
            "INSERT INTO employees (
                employee_id,
                full_name,
                email,
                department
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                employee.employee_id,
                employee.full_name,
                employee.email,
                employee.department,
            ],
        )
        .map_err(|err| map_unique_violation(err, &employee))?;

        let created = load_employee(&tx, &employee.employee_id)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "employee `{}` missing after insert",
                employee.employee_id
            ))
        })?;
        tx.commit()?;
        Ok(created)
    }

    fn get_employee(&self, employee_id: &str) -> RepoResult<Option<Employee>> {
        load_employee(self.conn, employee_id)
    }

    fn get_employee_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        load_employee_by_email(self.conn, &normalize_email(email))
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL}
             ORDER BY full_name COLLATE NOCASE ASC, employee_id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }
        Ok(employees)
    }

    fn delete_employee(&self, employee_id: &str) -> RepoResult<usize> {
        let tx = begin_write(self.conn)?;
        if !employee_exists(&tx, employee_id)? {
            return Err(RepoError::EmployeeNotFound(employee_id.to_string()));
        }

        let removed = tx.execute(
            "DELETE FROM attendance WHERE employee_id = ?1;",
            [employee_id],
        )?;
        tx.execute(
            "DELETE FROM employees WHERE employee_id = ?1;",
            [employee_id],
        )?;
        tx.commit()?;
        Ok(removed)
    }

    fn count_employees(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees;", [], |row| row.get(0))?;
        to_count(count, "employee")
    }

    fn count_distinct_departments(&self) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT department) FROM employees;",
            [],
            |row| row.get(0),
        )?;
        to_count(count, "department")
    }
}

pub(crate) fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    Ok(Employee {
        employee_id: row.get("employee_id")?,
        full_name: row.get("full_name")?,
        email: row.get("email")?,
        department: row.get("department")?,
        created_at: row.get("created_at")?,
    })
}

fn load_employee(conn: &Connection, employee_id: &str) -> RepoResult<Option<Employee>> {
    let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE employee_id = ?1;"))?;
    let row = stmt
        .query_row([employee_id], |row| Ok(parse_employee_row(row)))
        .optional()?;
    row.transpose()
}

fn load_employee_by_email(conn: &Connection, email: &str) -> RepoResult<Option<Employee>> {
    let mut stmt = conn.prepare(&format!(
        "{EMPLOYEE_SELECT_SQL} WHERE email = ?1 COLLATE NOCASE;"
    ))?;
    let row = stmt
        .query_row([email], |row| Ok(parse_employee_row(row)))
        .optional()?;
    row.transpose()
}

fn map_unique_violation(err: rusqlite::Error, employee: &NewEmployee) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, Some(message)) = &err {
        if failure.code == ErrorCode::ConstraintViolation {
            if message.contains("employees.email") {
                return RepoError::Conflict(ConflictKind::Email(employee.email.clone()));
            }
            if message.contains("employees.employee_id") {
                return RepoError::Conflict(ConflictKind::EmployeeId(
                    employee.employee_id.clone(),
                ));
            }
        }
    }
    err.into()
}
