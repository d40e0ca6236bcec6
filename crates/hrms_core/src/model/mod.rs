//! Domain records for employees and attendance marks.
//!
//! # Invariants
//! - Employees are identified by their business id; there is no surrogate key.
//! - At most one attendance record exists per `(employee_id, date)`.

pub mod attendance;
pub mod employee;
pub mod stats;
pub mod validation;
