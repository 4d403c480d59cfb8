use crate::models::client::{ClientList, NetworkClient};
use crate::{OmadaClient, OmadaResult};

/// Upper bound on clients retrieved per cycle. The endpoint is paginated
/// server-side; one page of this size covers the whole site.
const PAGE_SIZE: &str = "10000";

/// Provides read access to the active clients of the configured site.
pub struct ClientApi<'a> {
    client: &'a OmadaClient,
}

impl<'a> ClientApi<'a> {
    pub(crate) fn new(client: &'a OmadaClient) -> Self {
        Self { client }
    }

    /// Retrieves all active clients, wired and wireless.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the controller returns
    /// an error response.
    pub async fn list(&self) -> OmadaResult<Vec<NetworkClient>> {
        let endpoint = format!("api/v2/sites/{}/clients", self.client.site_id());
        let query = [
            ("currentPage", "1"),
            ("currentPageSize", PAGE_SIZE),
            ("filters.active", "true"),
        ];

        let list: ClientList = self.client.get_json(&endpoint, &query).await?;

        Ok(list.data)
    }
}
