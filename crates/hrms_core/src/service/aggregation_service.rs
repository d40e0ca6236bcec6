//! Dashboard and per-employee aggregates.

use crate::model::stats::{DashboardStats, EmployeeSummary, EmployeeTotals};
use crate::repo::aggregation_repo::AggregationRepository;
use crate::repo::error::{RepoError, RepoResult};
use chrono::NaiveDate;

/// Read-only aggregate queries.
pub struct AggregationService<R: AggregationRepository> {
    repo: R,
}

impl<R: AggregationRepository> AggregationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Figures for the dashboard on `today`.
    pub fn dashboard_stats(&self, today: NaiveDate) -> RepoResult<DashboardStats> {
        let counts = self.repo.dashboard_counts(today)?;
        Ok(DashboardStats {
            total_employees: counts.total_employees,
            present_today: counts.present,
            absent_today: counts.absent,
            attendance_rate: attendance_rate(counts.present, counts.total_employees),
            department_count: counts.departments,
        })
    }

    pub fn employee_totals(&self, employee_id: &str) -> RepoResult<EmployeeTotals> {
        let employee_id = employee_id.trim();
        self.repo
            .employee_totals(employee_id)?
            .ok_or_else(|| RepoError::EmployeeNotFound(employee_id.to_string()))
    }

    pub fn employee_directory(&self) -> RepoResult<Vec<EmployeeSummary>> {
        self.repo.employee_directory()
    }
}

/// Percentage of `total` that is `present`, rounded half to even.
///
/// Returns 0 when `total` is 0.
pub fn attendance_rate(present: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = u128::from(present) * 100;
    let total = u128::from(total);
    let quotient = scaled / total;
    let twice_remainder = (scaled % total) * 2;
    let rounded = match twice_remainder.cmp(&total) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient % 2),
    };
    u64::try_from(rounded).unwrap_or(u64::MAX)
}
