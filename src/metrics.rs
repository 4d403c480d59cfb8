//! Metric families and their label schema.
//!
//! A [`MetricsSnapshot`] is built fresh by every scrape cycle and swapped
//! into place atomically once complete, so the exposition endpoint never
//! observes a half-written set.

use std::sync::atomic::AtomicU64;

use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

/// All exported values are point-in-time readings from the controller.
pub type GaugeF64 = Gauge<f64, AtomicU64>;

/// Labels for per-device families.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct DeviceLabels {
    pub device: String,
    pub model: String,
    pub version: String,
    pub ip: String,
    pub mac: String,
    pub site: String,
    pub site_id: String,
    pub device_type: String,
}

/// Labels for per-client activity families.
///
/// Wired clients leave `ap_name`/`ssid`/`wifi_mode` empty; wireless
/// clients leave `switch_port`/`vlan_id` empty. The arity never changes.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ClientLabels {
    pub client: String,
    pub vendor: String,
    pub switch_port: String,
    pub vlan_id: String,
    pub ip: String,
    pub mac: String,
    pub site: String,
    pub site_id: String,
    pub ap_name: String,
    pub ssid: String,
    pub wifi_mode: String,
}

/// Labels for wireless-only client families.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct WirelessClientLabels {
    pub client: String,
    pub vendor: String,
    pub ip: String,
    pub mac: String,
    pub ap_name: String,
    pub site: String,
    pub site_id: String,
    pub ssid: String,
    pub wifi_mode: String,
}

/// Labels for per-port families. The `client`/`vendor`/`vlan_id` labels
/// come from the unique client-to-port join and are empty on no match.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct PortLabels {
    pub device: String,
    pub device_mac: String,
    pub client: String,
    pub vendor: String,
    pub switch_port: String,
    pub switch_mac: String,
    pub switch_id: String,
    pub vlan_id: String,
    pub profile: String,
    pub site: String,
    pub site_id: String,
}

/// Labels for controller families.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ControllerLabels {
    pub controller_name: String,
    pub model: String,
    pub controller_version: String,
    pub firmware_version: String,
    pub mac: String,
    pub site: String,
    pub site_id: String,
}

/// Labels for controller storage families.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct StorageLabels {
    pub storage_name: String,
    pub controller_name: String,
    pub model: String,
    pub controller_version: String,
    pub firmware_version: String,
    pub mac: String,
    pub site: String,
    pub site_id: String,
}

/// Labels for the site-wide client count.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct SiteLabels {
    pub site: String,
    pub site_id: String,
}

/// Labels for the client count by connection mode (wired/wireless).
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ConnectionModeLabels {
    pub site: String,
    pub site_id: String,
    pub mode: String,
}

/// Labels for the wireless client count by wifi mode.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct WifiModeLabels {
    pub site: String,
    pub site_id: String,
    pub wifi_mode: String,
}

/// One complete, immutable-once-published set of metric families.
pub struct MetricsSnapshot {
    registry: Registry,

    pub device_uptime_seconds: Family<DeviceLabels, GaugeF64>,
    pub device_cpu_percentage: Family<DeviceLabels, GaugeF64>,
    pub device_mem_percentage: Family<DeviceLabels, GaugeF64>,
    pub device_need_upgrade: Family<DeviceLabels, GaugeF64>,
    pub device_tx_rate: Family<DeviceLabels, GaugeF64>,
    pub device_rx_rate: Family<DeviceLabels, GaugeF64>,
    pub device_poe_remain_watts: Family<DeviceLabels, GaugeF64>,
    pub device_download_bytes: Family<DeviceLabels, GaugeF64>,
    pub device_upload_bytes: Family<DeviceLabels, GaugeF64>,

    pub client_download_activity_bytes: Family<ClientLabels, GaugeF64>,
    pub client_traffic_down_bytes: Family<ClientLabels, GaugeF64>,
    pub client_traffic_up_bytes: Family<ClientLabels, GaugeF64>,
    pub client_tx_rate: Family<ClientLabels, GaugeF64>,
    pub client_rx_rate: Family<ClientLabels, GaugeF64>,
    pub client_signal_dbm: Family<WirelessClientLabels, GaugeF64>,
    pub client_rssi_dbm: Family<WirelessClientLabels, GaugeF64>,
    pub client_connected_total: Family<SiteLabels, GaugeF64>,
    pub client_connected_by_connection: Family<ConnectionModeLabels, GaugeF64>,
    pub client_connected_by_wifi_mode: Family<WifiModeLabels, GaugeF64>,

    pub port_power_watts: Family<PortLabels, GaugeF64>,
    pub port_link_status: Family<PortLabels, GaugeF64>,
    pub port_link_speed_mbps: Family<PortLabels, GaugeF64>,

    pub controller_uptime_seconds: Family<ControllerLabels, GaugeF64>,
    pub controller_storage_used_bytes: Family<StorageLabels, GaugeF64>,
    pub controller_storage_available_bytes: Family<StorageLabels, GaugeF64>,
}

impl MetricsSnapshot {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        macro_rules! family {
            ($name:literal, $help:literal) => {{
                let family = Family::default();
                registry.register($name, $help, family.clone());
                family
            }};
        }

        MetricsSnapshot {
            device_uptime_seconds: family!("omada_device_uptime_seconds", "Uptime of the device"),
            device_cpu_percentage: family!(
                "omada_device_cpu_percentage",
                "Percentage of device CPU used"
            ),
            device_mem_percentage: family!(
                "omada_device_mem_percentage",
                "Percentage of device Memory used"
            ),
            device_need_upgrade: family!(
                "omada_device_need_upgrade",
                "A boolean on whether the device needs an upgrade"
            ),
            device_tx_rate: family!("omada_device_tx_rate", "The tx rate of the device"),
            device_rx_rate: family!("omada_device_rx_rate", "The rx rate of the device"),
            device_poe_remain_watts: family!(
                "omada_device_poe_remain_watts",
                "The remaining amount of PoE power for the device in watts"
            ),
            device_download_bytes: family!(
                "omada_device_download_bytes",
                "Total bytes downloaded by the device"
            ),
            device_upload_bytes: family!(
                "omada_device_upload_bytes",
                "Total bytes uploaded by the device"
            ),
            client_download_activity_bytes: family!(
                "omada_client_download_activity_bytes",
                "The current download activity for the client in bytes"
            ),
            client_traffic_down_bytes: family!(
                "omada_client_traffic_down_bytes",
                "Total bytes downloaded by the client"
            ),
            client_traffic_up_bytes: family!(
                "omada_client_traffic_up_bytes",
                "Total bytes uploaded by the client"
            ),
            client_tx_rate: family!("omada_client_tx_rate", "The tx rate of the client"),
            client_rx_rate: family!("omada_client_rx_rate", "The rx rate of the client"),
            client_signal_dbm: family!(
                "omada_client_signal_dbm",
                "The signal level for the wireless client in dBm"
            ),
            client_rssi_dbm: family!(
                "omada_client_rssi_dbm",
                "The RSSI for the wireless client in dBm"
            ),
            client_connected_total: family!(
                "omada_client_connected_total",
                "Total number of connected clients"
            ),
            client_connected_by_connection: family!(
                "omada_client_connected_by_connection_total",
                "Number of connected clients by connection mode"
            ),
            client_connected_by_wifi_mode: family!(
                "omada_client_connected_by_wifi_mode_total",
                "Number of connected wireless clients by wifi mode"
            ),
            port_power_watts: family!(
                "omada_port_power_watts",
                "The current PoE usage of the port in watts"
            ),
            port_link_status: family!(
                "omada_port_link_status",
                "A boolean representing the link status of the port"
            ),
            port_link_speed_mbps: family!(
                "omada_port_link_speed_mbps",
                "Port link speed in mbps. This is the capability of the connection, not the active throughput"
            ),
            controller_uptime_seconds: family!(
                "omada_controller_uptime_seconds",
                "Uptime of the controller"
            ),
            controller_storage_used_bytes: family!(
                "omada_controller_storage_used_bytes",
                "Storage used on the controller"
            ),
            controller_storage_available_bytes: family!(
                "omada_controller_storage_available_bytes",
                "Storage still available on the controller"
            ),
            registry,
        }
    }

    /// Renders the snapshot in the OpenMetrics text format.
    pub fn encode(&self) -> Result<String, std::fmt::Error> {
        let mut buf = String::new();
        encode(&mut buf, &self.registry)?;
        Ok(buf)
    }
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
