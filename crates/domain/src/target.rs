use crate::mac_address::MacAddress;
use chrono::{DateTime, Utc};
use std::net::IpAddr;

/// The network's default router, used as trust anchor for collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gateway {
    pub ip_address: IpAddr,
    pub hw_address: MacAddress,
}

impl Gateway {
    pub fn new(ip_address: IpAddr, hw_address: MacAddress) -> Self {
        Self {
            ip_address,
            hw_address,
        }
    }

    /// A different IP answering with the gateway's hardware address
    pub fn is_shared_by(&self, ip: &IpAddr, mac: &MacAddress) -> bool {
        *ip != self.ip_address && *mac == self.hw_address
    }
}

/// A live host discovered on the local segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub ip_address: IpAddr,
    pub hw_address: MacAddress,
    pub first_seen: DateTime<Utc>,
}

impl Target {
    pub fn new(ip_address: IpAddr, hw_address: MacAddress) -> Self {
        Self {
            ip_address,
            hw_address,
            first_seen: Utc::now(),
        }
    }
}
