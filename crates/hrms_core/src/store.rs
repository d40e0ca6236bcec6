//! Bundle of the three services over one connection.
//!
//! Construct once per opened connection and hand it to request handlers;
//! there is no process-wide database handle.

use crate::repo::aggregation_repo::SqliteAggregationRepository;
use crate::repo::attendance_repo::SqliteAttendanceRepository;
use crate::repo::employee_repo::SqliteEmployeeRepository;
use crate::repo::error::RepoResult;
use crate::service::aggregation_service::AggregationService;
use crate::service::attendance_service::AttendanceService;
use crate::service::employee_service::EmployeeService;
use rusqlite::Connection;

pub struct HrmsStore<'conn> {
    pub employees: EmployeeService<SqliteEmployeeRepository<'conn>>,
    pub attendance: AttendanceService<SqliteAttendanceRepository<'conn>>,
    pub stats: AggregationService<SqliteAggregationRepository<'conn>>,
}

impl<'conn> HrmsStore<'conn> {
    /// Builds every service on `conn`, which must be fully migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self {
            employees: EmployeeService::new(SqliteEmployeeRepository::try_new(conn)?),
            attendance: AttendanceService::new(SqliteAttendanceRepository::try_new(conn)?),
            stats: AggregationService::new(SqliteAggregationRepository::try_new(conn)?),
        })
    }
}
