//! HR endpoints.

use std::sync::Arc;

use tracing::instrument;

use meridian_core::Department;

use super::client::ErpClient;
use super::error::ErpError;
use super::types::{DepartmentDto, Employee, LeaveRequest};

impl ErpClient {
    /// Fetch the department list from `GET /hr/departments/`.
    ///
    /// Responses are cached briefly; the list changes rarely but is read on
    /// most renders.
    ///
    /// # Errors
    ///
    /// Propagates the client error taxonomy. Cache entries are only
    /// populated from successful fetches.
    #[instrument(skip(self, token))]
    pub async fn departments(&self, token: &str) -> Result<Arc<Vec<Department>>, ErpError> {
        if let Some(cached) = self.inner().departments.get(&()).await {
            return Ok(cached);
        }

        let dtos: Vec<DepartmentDto> = self.get_json(token, "hr/departments/").await?;
        let departments: Arc<Vec<Department>> =
            Arc::new(dtos.into_iter().map(Into::into).collect());

        self.inner()
            .departments
            .insert((), Arc::clone(&departments))
            .await;
        Ok(departments)
    }

    /// Fetch the employee list from `GET /hr/employees/`.
    ///
    /// # Errors
    ///
    /// Propagates the client error taxonomy.
    #[instrument(skip(self, token))]
    pub async fn employees(&self, token: &str) -> Result<Vec<Employee>, ErpError> {
        self.get_json(token, "hr/employees/").await
    }

    /// Fetch pending leave requests from `GET /hr/leave-requests/`.
    ///
    /// # Errors
    ///
    /// Propagates the client error taxonomy.
    #[instrument(skip(self, token))]
    pub async fn leave_requests(&self, token: &str) -> Result<Vec<LeaveRequest>, ErpError> {
        self.get_json(token, "hr/leave-requests/").await
    }
}
