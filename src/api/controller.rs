use crate::models::controller::Controller;
use crate::{OmadaClient, OmadaResult};

/// Provides read access to the controller's own status.
pub struct ControllerApi<'a> {
    client: &'a OmadaClient,
}

impl<'a> ControllerApi<'a> {
    pub(crate) fn new(client: &'a OmadaClient) -> Self {
        Self { client }
    }

    /// Retrieves controller identity, versions, uptime and storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the controller returns
    /// an error response.
    pub async fn get(&self) -> OmadaResult<Controller> {
        self.client
            .get_json("api/v2/maintenance/controllerStatus", &[])
            .await
    }
}
