//! SQLite storage bootstrap for the HR core.
//!
//! # Responsibility
//! - Open connections with the pragmas the stores rely on.
//! - Apply the embedded schema before any record is read or written.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A database written by a newer binary is never opened.

mod error;
pub mod migrations;
mod open;

pub use error::{DbError, DbResult};
pub use open::{open_db, open_db_in_memory};
