use crate::models::port::Port;
use crate::{OmadaClient, OmadaResult};

/// Provides read access to the port tables of the site's switches.
pub struct PortApi<'a> {
    client: &'a OmadaClient,
}

impl<'a> PortApi<'a> {
    pub(crate) fn new(client: &'a OmadaClient) -> Self {
        Self { client }
    }

    /// Retrieves the port table of one switch.
    ///
    /// The result may contain structurally identical duplicates on some
    /// switch models; callers that need one record per physical port
    /// should run it through [`crate::mapping::dedup_ports`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the controller returns
    /// an error response.
    pub async fn list(&self, switch_mac: &str) -> OmadaResult<Vec<Port>> {
        let endpoint = format!(
            "api/v2/sites/{}/switches/{}/ports",
            self.client.site_id(),
            switch_mac
        );

        self.client.get_json(&endpoint, &[]).await
    }
}
