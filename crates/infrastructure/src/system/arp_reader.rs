use async_trait::async_trait;
use ferrous_recon_application::ports::ArpReader;
use ferrous_recon_domain::{AddressTable, DomainError, MacAddress};
use std::net::IpAddr;
use tokio::fs;
use tracing::{debug, warn};

/// Linux ARP cache reader (reads /proc/net/arp)
pub struct LinuxArpReader {
    arp_path: String,
}

impl LinuxArpReader {
    pub fn new() -> Self {
        Self {
            arp_path: "/proc/net/arp".to_string(),
        }
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            arp_path: path.into(),
        }
    }

    fn parse(content: &str, interface: &str) -> AddressTable {
        // Format of /proc/net/arp:
        // IP address       HW type     Flags       HW address            Mask     Device
        // 192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0
        content
            .lines()
            .skip(1)
            .filter_map(|line| {
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() < 6 {
                    return None;
                }

                let (ip_str, flags, mac_str, device) = (fields[0], fields[2], fields[3], fields[5]);

                if device != interface || !is_complete(flags) {
                    return None;
                }

                let ip = match ip_str.parse::<IpAddr>() {
                    Ok(ip) => ip,
                    Err(e) => {
                        warn!(error = %e, ip = ip_str, "Invalid IP in ARP table");
                        return None;
                    }
                };

                match mac_str.parse::<MacAddress>() {
                    Ok(mac) if !mac.is_zero() => Some((ip, mac)),
                    Ok(_) => None,
                    Err(e) => {
                        warn!(error = %e, ip = %ip, "Invalid MAC in ARP table");
                        None
                    }
                }
            })
            .collect()
    }
}

const ATF_COM: u32 = 0x2;

/// ATF_COM set; static entries (ATF_PERM) are complete too
fn is_complete(flags: &str) -> bool {
    u32::from_str_radix(flags.trim_start_matches("0x"), 16)
        .is_ok_and(|flags| flags & ATF_COM != 0)
}

impl Default for LinuxArpReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArpReader for LinuxArpReader {
    async fn read_arp_table(&self, interface: &str) -> Result<AddressTable, DomainError> {
        let content = fs::read_to_string(&self.arp_path).await.map_err(|e| {
            DomainError::ArpTableUnavailable(format!("{}: {}", self.arp_path, e))
        })?;

        let table = Self::parse(&content, interface);
        debug!(entries = table.len(), interface, "ARP table parsed");
        Ok(table)
    }
}
