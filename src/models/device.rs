use serde::{Deserialize, Serialize};

use crate::models::port::Port;

/// A device managed by the controller (access point, switch, gateway, ...).
///
/// Devices of other types leave the fields that don't apply to them at
/// their zero values, which is also what the controller sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Device {
    pub name: String,

    /// Device type as reported by the controller: "ap", "switch", "gateway".
    #[serde(rename = "type")]
    pub device_type: String,

    pub mac: String,
    pub model: String,

    /// Firmware version.
    pub version: String,

    pub ip: String,
    pub cpu_util: f64,
    pub mem_util: f64,

    /// Uptime in seconds.
    #[serde(rename = "uptimeLong")]
    pub uptime: f64,

    pub need_upgrade: bool,
    pub tx_rate: f64,
    pub rx_rate: f64,

    /// Remaining PoE budget in watts. Switches only.
    pub poe_remain: f64,

    pub download: u64,
    pub upload: u64,

    /// Port table, attached by the API client for switches only. Not part
    /// of the devices response itself.
    #[serde(skip_deserializing)]
    pub ports: Vec<Port>,
}

impl Device {
    pub fn is_switch(&self) -> bool {
        self.device_type == "switch"
    }

    pub fn is_ap(&self) -> bool {
        self.device_type == "ap"
    }
}
