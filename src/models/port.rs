use serde::{Deserialize, Serialize};

/// One entry of a switch's port table.
///
/// Equality is structural over every field, including the nested status.
/// The controller sometimes reports the same physical port twice; two
/// records are duplicates only when they compare equal in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Port {
    pub id: String,
    pub switch_id: String,
    pub switch_mac: String,
    pub name: String,

    /// Physical port number.
    pub port: u32,

    pub profile_name: String,

    #[serde(rename = "portStatus")]
    pub status: PortStatus,
}

/// Live status of a switch port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortStatus {
    /// 1 when the link is up, 0 when it is down.
    pub link_status: f64,

    /// Link speed code, decoded to Mbps by the mapper.
    pub link_speed: i64,

    /// PoE wattage currently delivered by the port.
    pub poe_power: f64,

    pub poe: bool,
    pub rx_bytes: f64,
    pub tx_bytes: f64,
}
