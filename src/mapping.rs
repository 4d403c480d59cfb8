//! Pure mapping logic between controller records and metric values:
//! hardware-code tables, port deduplication and the client-to-port join.

use crate::models::client::NetworkClient;
use crate::models::port::Port;

/// Negotiated link speed of a switch port, as reported by its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSpeed {
    Down,
    Mbps10,
    Mbps100,
    Gbps1,
    Gbps2_5,
    Gbps10,
}

impl LinkSpeed {
    /// Decodes the controller's link speed code. Unknown codes are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(LinkSpeed::Down),
            1 => Some(LinkSpeed::Mbps10),
            2 => Some(LinkSpeed::Mbps100),
            3 => Some(LinkSpeed::Gbps1),
            4 => Some(LinkSpeed::Gbps2_5),
            5 => Some(LinkSpeed::Gbps10),
            _ => None,
        }
    }

    /// The speed in Mbps.
    pub fn mbps(self) -> f64 {
        match self {
            LinkSpeed::Down => 0.0,
            LinkSpeed::Mbps10 => 10.0,
            LinkSpeed::Mbps100 => 100.0,
            LinkSpeed::Gbps1 => 1000.0,
            LinkSpeed::Gbps2_5 => 2500.0,
            LinkSpeed::Gbps10 => 10000.0,
        }
    }
}

/// Link speed in Mbps for a status code; unknown codes map to 0.
pub fn link_speed_mbps(code: i64) -> f64 {
    LinkSpeed::from_code(code).map_or(0.0, LinkSpeed::mbps)
}

/// Protocol name for a wifi mode code; unknown codes render empty.
pub fn wifi_mode_name(code: i64) -> &'static str {
    match code {
        0 => "802.11a",
        1 => "802.11b",
        2 => "802.11g",
        3 => "802.11na",
        4 => "802.11ng",
        5 => "802.11ac",
        6 => "802.11axa",
        7 => "802.11axg",
        _ => "",
    }
}

/// Drops duplicate port records, keeping the first occurrence of each
/// distinct record in its original position.
///
/// Some switch models report every physical port twice; the duplicates are
/// structurally identical, so records are compared over every field. Two
/// records that merely overlap are both kept.
pub fn dedup_ports(ports: Vec<Port>) -> Vec<Port> {
    let mut unique: Vec<Port> = Vec::with_capacity(ports.len());
    for port in ports {
        if !unique.contains(&port) {
            unique.push(port);
        }
    }
    unique
}

/// Finds the wired client occupying the given port of the given switch.
///
/// The match must be unique: with zero or several candidates the join
/// degrades to "no match" and the caller emits empty client labels.
pub fn client_on_port<'a>(
    clients: &'a [NetworkClient],
    switch_mac: &str,
    port: u32,
) -> Option<&'a NetworkClient> {
    let mut candidates = clients
        .iter()
        .filter(|c| !c.wireless && c.switch_mac == switch_mac && c.port == Some(port));

    match (candidates.next(), candidates.next()) {
        (Some(client), None) => Some(client),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::port::PortStatus;

    fn port(number: u32, poe_power: f64) -> Port {
        Port {
            id: format!("port-{number}"),
            switch_id: "sw-1".into(),
            switch_mac: "AA-BB-CC-DD-EE-FF".into(),
            name: format!("Port {number}"),
            port: number,
            profile_name: "All".into(),
            status: PortStatus {
                link_status: 1.0,
                link_speed: 3,
                poe_power,
                poe: true,
                rx_bytes: 1024.0,
                tx_bytes: 2048.0,
            },
        }
    }

    fn wired_client(mac: &str, switch_mac: &str, port: u32) -> NetworkClient {
        NetworkClient {
            mac: mac.into(),
            host_name: format!("host-{mac}"),
            switch_mac: switch_mac.into(),
            port: Some(port),
            wireless: false,
            ..NetworkClient::default()
        }
    }

    #[test]
    fn link_speed_table_is_fixed() {
        assert_eq!(link_speed_mbps(0), 0.0);
        assert_eq!(link_speed_mbps(1), 10.0);
        assert_eq!(link_speed_mbps(2), 100.0);
        assert_eq!(link_speed_mbps(3), 1000.0);
        assert_eq!(link_speed_mbps(4), 2500.0);
        assert_eq!(link_speed_mbps(5), 10000.0);
    }

    #[test]
    fn unknown_link_speed_codes_map_to_zero() {
        assert_eq!(link_speed_mbps(6), 0.0);
        assert_eq!(link_speed_mbps(255), 0.0);
        assert_eq!(link_speed_mbps(-1), 0.0);
        assert_eq!(link_speed_mbps(i64::MAX), 0.0);
    }

    #[test]
    fn wifi_mode_names() {
        assert_eq!(wifi_mode_name(5), "802.11ac");
        assert_eq!(wifi_mode_name(0), "802.11a");
        assert_eq!(wifi_mode_name(7), "802.11axg");
        assert_eq!(wifi_mode_name(8), "");
        assert_eq!(wifi_mode_name(-3), "");
    }

    #[test]
    fn dedup_removes_field_equal_records_only() {
        // 4 physical ports reported twice, plus a distinct-but-overlapping
        // record for port 1 that must survive.
        let mut reported: Vec<Port> = Vec::new();
        for n in 1..=4 {
            reported.push(port(n, n as f64));
            reported.push(port(n, n as f64));
        }
        let mut overlapping = port(1, 1.0);
        overlapping.status.poe_power = 7.5;
        reported.push(overlapping.clone());

        let unique = dedup_ports(reported);

        assert_eq!(unique.len(), 5);
        assert_eq!(
            unique.iter().map(|p| p.port).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 1]
        );
        assert_eq!(unique[4], overlapping);
    }

    #[test]
    fn dedup_preserves_first_seen_order() {
        let input = vec![port(3, 3.0), port(1, 1.0), port(3, 3.0), port(2, 2.0)];
        let unique = dedup_ports(input);
        assert_eq!(unique.iter().map(|p| p.port).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let input = vec![port(1, 1.0), port(1, 1.0), port(2, 2.0)];
        let once = dedup_ports(input);
        let twice = dedup_ports(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn join_finds_the_unique_wired_client() {
        let clients = vec![
            wired_client("aa", "AA-BB-CC-DD-EE-FF", 1),
            wired_client("bb", "AA-BB-CC-DD-EE-FF", 2),
        ];

        let hit = client_on_port(&clients, "AA-BB-CC-DD-EE-FF", 2);
        assert_eq!(hit.map(|c| c.mac.as_str()), Some("bb"));

        // Repeated calls yield the same match.
        let again = client_on_port(&clients, "AA-BB-CC-DD-EE-FF", 2);
        assert_eq!(again.map(|c| c.mac.as_str()), Some("bb"));
    }

    #[test]
    fn join_degrades_on_zero_or_many_candidates() {
        let clients = vec![
            wired_client("aa", "AA-BB-CC-DD-EE-FF", 1),
            wired_client("bb", "AA-BB-CC-DD-EE-FF", 1),
        ];

        // Two candidates on port 1, none on port 9.
        assert!(client_on_port(&clients, "AA-BB-CC-DD-EE-FF", 1).is_none());
        assert!(client_on_port(&clients, "AA-BB-CC-DD-EE-FF", 9).is_none());
    }

    #[test]
    fn join_ignores_wireless_clients() {
        let mut roaming = wired_client("aa", "AA-BB-CC-DD-EE-FF", 1);
        roaming.wireless = true;

        assert!(client_on_port(&[roaming], "AA-BB-CC-DD-EE-FF", 1).is_none());
    }
}
