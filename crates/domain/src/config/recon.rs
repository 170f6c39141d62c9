use crate::mac_address::MacAddress;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReconConfig {
    /// Interface whose ARP entries are monitored
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Seconds between two ARP table refreshes
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_arp_path")]
    pub arp_path: String,

    #[serde(default = "default_route_path")]
    pub route_path: String,

    /// Skip routing table discovery and use this gateway IP
    #[serde(default)]
    pub gateway_ip: Option<IpAddr>,

    /// Only honoured together with `gateway_ip`
    #[serde(default)]
    pub gateway_mac: Option<MacAddress>,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            interval_secs: default_interval_secs(),
            arp_path: default_arp_path(),
            route_path: default_route_path(),
            gateway_ip: None,
            gateway_mac: None,
        }
    }
}

fn default_interface() -> String {
    "eth0".to_string()
}

fn default_interval_secs() -> u64 {
    1
}

fn default_arp_path() -> String {
    "/proc/net/arp".to_string()
}

fn default_route_path() -> String {
    "/proc/net/route".to_string()
}
