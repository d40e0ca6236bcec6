//! Core record keeping for employees and daily attendance.
//! Every uniqueness and cascade rule lives here; transports sit on top.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendance::{
    validate_date, AttendanceEntry, AttendanceId, AttendanceRecord, AttendanceStatus,
};
pub use model::employee::{Employee, NewEmployee};
pub use model::stats::{DashboardStats, EmployeeSummary, EmployeeTotals};
pub use model::validation::ValidationError;
pub use repo::aggregation_repo::{
    AggregationRepository, DashboardCounts, SqliteAggregationRepository,
};
pub use repo::attendance_repo::{
    AttendanceListQuery, AttendanceRepository, SqliteAttendanceRepository,
};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::error::{ConflictKind, ErrorKind, RepoError, RepoResult};
pub use service::aggregation_service::{attendance_rate, AggregationService};
pub use service::attendance_service::AttendanceService;
pub use service::employee_service::EmployeeService;
pub use store::HrmsStore;

/// Liveness probe for callers wiring up the core.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
