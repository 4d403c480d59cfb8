use serde::{Deserialize, Serialize};

/// Identity and health of the controller itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Controller {
    pub name: String,
    pub mac_address: String,
    pub firmware_version: String,
    pub controller_version: String,
    pub model: String,

    /// Uptime in milliseconds.
    #[serde(rename = "upTime")]
    pub uptime: f64,

    /// Storage volumes on hardware controllers, sizes in gigabytes.
    #[serde(rename = "hwcStorage")]
    pub storage: Vec<Storage>,
}

/// One storage volume of a hardware controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub name: String,

    #[serde(rename = "totalStorage")]
    pub total: f64,

    #[serde(rename = "usedStorage")]
    pub used: f64,
}
