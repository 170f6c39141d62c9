#![allow(dead_code)]
use ferrous_recon_domain::{AddressTable, Gateway, MacAddress};
use std::net::IpAddr;

pub fn ip(addr: &str) -> IpAddr {
    addr.parse().unwrap()
}

pub fn mac(addr: &str) -> MacAddress {
    addr.parse().unwrap()
}

pub fn table(entries: &[(&str, &str)]) -> AddressTable {
    entries.iter().map(|(i, m)| (ip(i), mac(m))).collect()
}

pub fn gateway(ip_addr: &str, hw: &str) -> Gateway {
    Gateway::new(ip(ip_addr), mac(hw))
}
