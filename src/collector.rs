//! One scrape cycle: fetch devices, clients and controller status, join
//! them into the label model and publish a fresh metrics snapshot.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::mapping::{client_on_port, dedup_ports, link_speed_mbps, wifi_mode_name};
use crate::metrics::{
    ClientLabels, ConnectionModeLabels, ControllerLabels, DeviceLabels, MetricsSnapshot,
    PortLabels, SiteLabels, StorageLabels, WifiModeLabels, WirelessClientLabels,
};
use crate::models::client::NetworkClient;
use crate::models::controller::Controller;
use crate::models::device::Device;
use crate::{OmadaClient, OmadaResult};

const GIGABYTE: f64 = 1e9;

/// Fetches telemetry from the controller and publishes metric snapshots.
pub struct Collector {
    client: OmadaClient,
    snapshot: Arc<ArcSwap<MetricsSnapshot>>,
}

impl Collector {
    pub fn new(client: OmadaClient, snapshot: Arc<ArcSwap<MetricsSnapshot>>) -> Self {
        Self { client, snapshot }
    }

    /// Runs one full scrape cycle.
    ///
    /// All fetches happen before anything is recorded; a failed fetch
    /// abandons the cycle and leaves the published snapshot untouched.
    pub async fn scrape(&self) -> OmadaResult<()> {
        let devices = self.client.devices().list().await?;
        let clients = self.client.clients().list().await?;
        let controller = self.client.controller().get().await?;

        let next = MetricsSnapshot::new();
        self.record_devices(&next, &devices, &clients);
        self.record_clients(&next, &clients);
        self.record_controller(&next, &controller);

        self.snapshot.store(Arc::new(next));
        Ok(())
    }

    fn record_devices(&self, m: &MetricsSnapshot, devices: &[Device], clients: &[NetworkClient]) {
        for device in devices {
            let labels = self.device_labels(device);

            m.device_uptime_seconds.get_or_create(&labels).set(device.uptime);
            m.device_cpu_percentage.get_or_create(&labels).set(device.cpu_util);
            m.device_mem_percentage.get_or_create(&labels).set(device.mem_util);
            m.device_need_upgrade
                .get_or_create(&labels)
                .set(if device.need_upgrade { 1.0 } else { 0.0 });
            m.device_download_bytes
                .get_or_create(&labels)
                .set(device.download as f64);
            m.device_upload_bytes
                .get_or_create(&labels)
                .set(device.upload as f64);

            if device.is_ap() {
                m.device_tx_rate.get_or_create(&labels).set(device.tx_rate);
                m.device_rx_rate.get_or_create(&labels).set(device.rx_rate);
            }
            if device.is_switch() {
                m.device_poe_remain_watts
                    .get_or_create(&labels)
                    .set(device.poe_remain);
                self.record_ports(m, device, clients);
            }
        }
    }

    fn record_ports(&self, m: &MetricsSnapshot, device: &Device, clients: &[NetworkClient]) {
        // Some switch models report every port twice; only field-equal
        // records are collapsed.
        let ports = dedup_ports(device.ports.clone());

        for port in &ports {
            let occupant = client_on_port(clients, &port.switch_mac, port.port);

            let labels = PortLabels {
                device: device.name.clone(),
                device_mac: device.mac.clone(),
                client: occupant.map_or_else(String::new, |c| c.host_name.clone()),
                vendor: occupant.map_or_else(String::new, |c| c.vendor.clone()),
                switch_port: port.port.to_string(),
                switch_mac: port.switch_mac.clone(),
                switch_id: port.switch_id.clone(),
                vlan_id: occupant.map_or_else(String::new, |c| c.vlan_id.to_string()),
                profile: port.profile_name.clone(),
                site: self.client.site().to_string(),
                site_id: self.client.site_id().to_string(),
            };

            m.port_power_watts
                .get_or_create(&labels)
                .set(port.status.poe_power);
            m.port_link_status
                .get_or_create(&labels)
                .set(port.status.link_status);
            m.port_link_speed_mbps
                .get_or_create(&labels)
                .set(link_speed_mbps(port.status.link_speed));
        }
    }

    fn record_clients(&self, m: &MetricsSnapshot, clients: &[NetworkClient]) {
        let site = self.client.site().to_string();
        let site_id = self.client.site_id().to_string();

        m.client_connected_total
            .get_or_create(&SiteLabels {
                site: site.clone(),
                site_id: site_id.clone(),
            })
            .set(clients.len() as f64);

        for mode in ["wired", "wireless"] {
            let count = clients
                .iter()
                .filter(|c| c.wireless == (mode == "wireless"))
                .count();
            m.client_connected_by_connection
                .get_or_create(&ConnectionModeLabels {
                    site: site.clone(),
                    site_id: site_id.clone(),
                    mode: mode.to_string(),
                })
                .set(count as f64);
        }

        for client in clients.iter().filter(|c| c.wireless) {
            let name = wifi_mode_name(client.wifi_mode);
            if name.is_empty() {
                continue;
            }
            m.client_connected_by_wifi_mode
                .get_or_create(&WifiModeLabels {
                    site: site.clone(),
                    site_id: site_id.clone(),
                    wifi_mode: name.to_string(),
                })
                .inc_by(1.0);
        }

        for client in clients {
            let labels = self.client_labels(client);

            m.client_download_activity_bytes
                .get_or_create(&labels)
                .set(client.activity);
            m.client_traffic_down_bytes
                .get_or_create(&labels)
                .set(client.traffic_down);
            m.client_traffic_up_bytes
                .get_or_create(&labels)
                .set(client.traffic_up);
            m.client_tx_rate.get_or_create(&labels).set(client.tx_rate);
            m.client_rx_rate.get_or_create(&labels).set(client.rx_rate);

            if client.wireless {
                let labels = WirelessClientLabels {
                    client: client.host_name.clone(),
                    vendor: client.vendor.clone(),
                    ip: client.ip.clone(),
                    mac: client.mac.clone(),
                    ap_name: client.ap_name.clone(),
                    site: site.clone(),
                    site_id: site_id.clone(),
                    ssid: client.ssid.clone(),
                    wifi_mode: wifi_mode_name(client.wifi_mode).to_string(),
                };
                m.client_signal_dbm
                    .get_or_create(&labels)
                    .set(client.signal_level);
                m.client_rssi_dbm.get_or_create(&labels).set(client.rssi);
            }
        }
    }

    fn record_controller(&self, m: &MetricsSnapshot, controller: &Controller) {
        let labels = ControllerLabels {
            controller_name: controller.name.clone(),
            model: controller.model.clone(),
            controller_version: controller.controller_version.clone(),
            firmware_version: controller.firmware_version.clone(),
            mac: controller.mac_address.clone(),
            site: self.client.site().to_string(),
            site_id: self.client.site_id().to_string(),
        };

        // upTime is reported in milliseconds.
        m.controller_uptime_seconds
            .get_or_create(&labels)
            .set(controller.uptime / 1000.0);

        for volume in &controller.storage {
            let labels = StorageLabels {
                storage_name: volume.name.clone(),
                controller_name: labels.controller_name.clone(),
                model: labels.model.clone(),
                controller_version: labels.controller_version.clone(),
                firmware_version: labels.firmware_version.clone(),
                mac: labels.mac.clone(),
                site: labels.site.clone(),
                site_id: labels.site_id.clone(),
            };

            // Volume sizes arrive in gigabytes.
            m.controller_storage_used_bytes
                .get_or_create(&labels)
                .set(volume.used * GIGABYTE);
            m.controller_storage_available_bytes
                .get_or_create(&labels)
                .set((volume.total - volume.used) * GIGABYTE);
        }
    }

    fn device_labels(&self, device: &Device) -> DeviceLabels {
        DeviceLabels {
            device: device.name.clone(),
            model: device.model.clone(),
            version: device.version.clone(),
            ip: device.ip.clone(),
            mac: device.mac.clone(),
            site: self.client.site().to_string(),
            site_id: self.client.site_id().to_string(),
            device_type: device.device_type.clone(),
        }
    }

    fn client_labels(&self, client: &NetworkClient) -> ClientLabels {
        let (switch_port, vlan_id, ap_name, ssid, wifi_mode) = if client.wireless {
            (
                String::new(),
                String::new(),
                client.ap_name.clone(),
                client.ssid.clone(),
                wifi_mode_name(client.wifi_mode).to_string(),
            )
        } else {
            (
                client.port.map_or_else(String::new, |p| p.to_string()),
                client.vlan_id.to_string(),
                String::new(),
                String::new(),
                String::new(),
            )
        };

        ClientLabels {
            client: client.host_name.clone(),
            vendor: client.vendor.clone(),
            switch_port,
            vlan_id,
            ip: client.ip.clone(),
            mac: client.mac.clone(),
            site: self.client.site().to_string(),
            site_id: self.client.site_id().to_string(),
            ap_name,
            ssid,
            wifi_mode,
        }
    }
}
