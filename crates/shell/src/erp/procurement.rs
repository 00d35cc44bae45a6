//! Procurement endpoints.

use tracing::instrument;

use super::client::ErpClient;
use super::error::ErpError;
use super::types::ProcurementRequest;

impl ErpClient {
    /// Fetch open procurement requests from `GET /procurement/requests/`.
    ///
    /// # Errors
    ///
    /// Propagates the client error taxonomy.
    #[instrument(skip(self, token))]
    pub async fn procurement_requests(
        &self,
        token: &str,
    ) -> Result<Vec<ProcurementRequest>, ErpError> {
        self.get_json(token, "procurement/requests/").await
    }
}
