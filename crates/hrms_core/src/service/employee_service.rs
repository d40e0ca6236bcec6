//! Employee use-case service.

use crate::model::employee::{normalize_email, Employee, NewEmployee};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::error::{RepoError, RepoResult};
use log::{info, warn};

/// Employee operations for request handlers.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one employee.
    ///
    /// # Errors
    /// - `Validation` for empty, over-length or malformed fields.
    /// - `Conflict` when the id or email is already taken.
    pub fn create(&self, input: &NewEmployee) -> RepoResult<Employee> {
        match self.repo.create_employee(input) {
            Ok(employee) => {
                info!(
                    "event=employee_create module=service status=ok employee_id={}",
                    employee.employee_id
                );
                Ok(employee)
            }
            Err(err) => {
                warn!(
                    "event=employee_create module=service status=error error_code={}",
                    err.code()
                );
                Err(err)
            }
        }
    }

    pub fn get(&self, employee_id: &str) -> RepoResult<Employee> {
        let employee_id = employee_id.trim();
        self.repo
            .get_employee(employee_id)?
            .ok_or_else(|| RepoError::EmployeeNotFound(employee_id.to_string()))
    }

    pub fn get_by_email(&self, email: &str) -> RepoResult<Employee> {
        let email = normalize_email(email);
        match self.repo.get_employee_by_email(&email)? {
            Some(employee) => Ok(employee),
            None => Err(RepoError::EmployeeEmailNotFound(email)),
        }
    }

    pub fn list(&self) -> RepoResult<Vec<Employee>> {
        self.repo.list_employees()
    }

    /// Deletes the employee and every attendance mark it owns.
    ///
    /// Returns the number of attendance marks removed.
    pub fn delete(&self, employee_id: &str) -> RepoResult<usize> {
        let employee_id = employee_id.trim();
        let removed = self.repo.delete_employee(employee_id)?;
        info!(
            "event=employee_delete module=service status=ok employee_id={} attendance_removed={}",
            employee_id, removed
        );
        Ok(removed)
    }

    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count_employees()
    }

    pub fn count_distinct_departments(&self) -> RepoResult<u64> {
        self.repo.count_distinct_departments()
    }
}
