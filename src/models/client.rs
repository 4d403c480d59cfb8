use serde::{Deserialize, Serialize};

/// An active client on the network, wired or wireless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkClient {
    pub name: String,
    pub host_name: String,
    pub mac: String,
    pub ip: String,

    #[serde(rename = "vid")]
    pub vlan_id: u32,

    pub wireless: bool,

    /// MAC of the switch the client is plugged into. Wired clients only.
    pub switch_mac: String,

    /// Number of the switch port the client occupies. Wired clients only.
    pub port: Option<u32>,

    pub vendor: String,

    /// Current download activity in bytes.
    pub activity: f64,

    pub signal_level: f64,
    pub rssi: f64,
    pub traffic_down: f64,
    pub traffic_up: f64,
    pub tx_rate: f64,
    pub rx_rate: f64,

    pub ssid: String,
    pub ap_name: String,

    /// Wifi mode code, rendered to a protocol name by the mapper.
    pub wifi_mode: i64,
}

/// Paginated container the clients endpoint wraps its records in.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientList {
    pub data: Vec<NetworkClient>,
}
