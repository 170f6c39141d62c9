use crate::ports::{ArpReader, RouteReader};
use ferrous_recon_domain::{DomainError, Gateway, MacAddress};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: find the default gateway and its hardware address.
///
/// Configured values take precedence over what the routing and ARP tables
/// report.
pub struct DetectGatewayUseCase {
    route_reader: Arc<dyn RouteReader>,
    arp_reader: Arc<dyn ArpReader>,
}

impl DetectGatewayUseCase {
    pub fn new(route_reader: Arc<dyn RouteReader>, arp_reader: Arc<dyn ArpReader>) -> Self {
        Self {
            route_reader,
            arp_reader,
        }
    }

    pub async fn execute(
        &self,
        interface: &str,
        ip_override: Option<IpAddr>,
        mac_override: Option<MacAddress>,
    ) -> Result<Gateway, DomainError> {
        let ip = match ip_override {
            Some(ip) => ip,
            None => self.route_reader.default_gateway(interface).await?,
        };

        let mac = match mac_override {
            Some(mac) => mac,
            None => {
                debug!(ip = %ip, interface, "Looking up gateway hardware address");
                let table = self.arp_reader.read_arp_table(interface).await?;
                *table
                    .get(&ip)
                    .ok_or_else(|| DomainError::GatewayNotFound(interface.to_string()))?
            }
        };

        let gateway = Gateway::new(ip, mac);
        info!(ip = %gateway.ip_address, mac = %gateway.hw_address, "Gateway detected");
        Ok(gateway)
    }
}
