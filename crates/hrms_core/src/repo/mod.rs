//! Store contracts and their SQLite implementations.
//!
//! # Responsibility
//! - Keep SQL inside the persistence boundary.
//! - Run every mutation as one `BEGIN IMMEDIATE` transaction so the write
//!   lock and UNIQUE constraints arbitrate concurrent writers.
//!
//! # Invariants
//! - Write paths validate input before touching SQL.
//! - Stores only accept connections migrated to the latest schema.

pub mod aggregation_repo;
pub mod attendance_repo;
pub mod employee_repo;
pub mod error;

use crate::db::migrations::{current_version, latest_version};
use error::{RepoError, RepoResult};
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Starts a write transaction on a shared connection.
///
/// Dropping the returned transaction without `commit` rolls it back.
pub(crate) fn begin_write(conn: &Connection) -> RepoResult<Transaction<'_>> {
    Ok(Transaction::new_unchecked(
        conn,
        TransactionBehavior::Immediate,
    )?)
}

pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    required_tables: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for &table in required_tables {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

pub(crate) fn employee_exists(conn: &Connection, employee_id: &str) -> RepoResult<bool> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ?1);",
        [employee_id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Converts a SQL `COUNT`/`SUM` result into an unsigned count.
pub(crate) fn to_count(value: i64, what: &str) -> RepoResult<u64> {
    u64::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("negative {what} count `{value}`")))
}
