use crate::models::device::Device;
use crate::{OmadaClient, OmadaResult};

/// Provides read access to the devices managed by the configured site.
pub struct DeviceApi<'a> {
    client: &'a OmadaClient,
}

impl<'a> DeviceApi<'a> {
    pub(crate) fn new(client: &'a OmadaClient) -> Self {
        Self { client }
    }

    /// Retrieves all managed devices, with the port table attached to
    /// every switch.
    ///
    /// There is no partial-result mode: if the port table of any switch
    /// cannot be fetched, the whole call fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the controller returns an
    /// error response, or any nested port fetch fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &omada_exporter::OmadaClient) -> omada_exporter::OmadaResult<()> {
    /// let devices = client.devices().list().await?;
    /// for device in devices {
    ///     println!("{} ({})", device.name, device.device_type);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self) -> OmadaResult<Vec<Device>> {
        let endpoint = format!("api/v2/sites/{}/devices", self.client.site_id());

        let mut devices: Vec<Device> = self.client.get_json(&endpoint, &[]).await?;

        for device in &mut devices {
            if device.is_switch() {
                device.ports = self.client.ports().list(&device.mac).await?;
            }
        }

        Ok(devices)
    }
}
