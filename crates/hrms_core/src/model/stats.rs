//! Derived counts returned by aggregation queries.

use crate::model::employee::Employee;
use serde::{Deserialize, Serialize};

/// Present/absent totals for one employee across all days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    pub present_count: u64,
    pub absent_count: u64,
}

/// Employee row together with its attendance totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(flatten)]
    pub employee: Employee,
    #[serde(flatten)]
    pub totals: EmployeeTotals,
}

/// Daily dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub present_today: u64,
    pub absent_today: u64,
    /// Whole percent of employees marked present, rounded half to even.
    pub attendance_rate: u64,
    pub department_count: u64,
}
