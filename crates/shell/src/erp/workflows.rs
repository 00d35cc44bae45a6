//! Workflow endpoints.

use tracing::instrument;

use meridian_core::notifications::DeliveryRecord;
use meridian_core::{WorkflowInstance, WorkflowInstanceId};

use super::client::ErpClient;
use super::error::ErpError;
use super::types::{DeliveryRecordDto, WorkflowInstanceDto};

impl ErpClient {
    /// Fetch one workflow instance from `GET /workflows/instances/{id}/`.
    ///
    /// # Errors
    ///
    /// `ErpError::NotFound` when the instance does not exist.
    #[instrument(skip(self, token))]
    pub async fn workflow_instance(
        &self,
        token: &str,
        id: WorkflowInstanceId,
    ) -> Result<WorkflowInstance, ErpError> {
        let dto: WorkflowInstanceDto = self
            .get_json(token, &format!("workflows/instances/{id}/"))
            .await?;
        Ok(dto.into())
    }

    /// Fetch the flat notification delivery list for an instance from
    /// `GET /workflows/instances/{id}/notification-status/`.
    ///
    /// # Errors
    ///
    /// `ErpError::NotFound` when the instance does not exist.
    #[instrument(skip(self, token))]
    pub async fn notification_records(
        &self,
        token: &str,
        id: WorkflowInstanceId,
    ) -> Result<Vec<DeliveryRecord>, ErpError> {
        let dtos: Vec<DeliveryRecordDto> = self
            .get_json(token, &format!("workflows/instances/{id}/notification-status/"))
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }
}
