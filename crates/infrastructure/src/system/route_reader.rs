use async_trait::async_trait;
use ferrous_recon_application::ports::RouteReader;
use ferrous_recon_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use tokio::fs;
use tracing::debug;

/// Default-route lookup backed by /proc/net/route
pub struct ProcRouteReader {
    route_path: String,
}

impl ProcRouteReader {
    pub fn new() -> Self {
        Self {
            route_path: "/proc/net/route".to_string(),
        }
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            route_path: path.into(),
        }
    }

    fn parse(content: &str, interface: &str) -> Option<Ipv4Addr> {
        // Iface  Destination  Gateway   Flags  RefCnt  Use  Metric  Mask  ...
        // eth0   00000000     0101A8C0  0003   0       0    100     00000000
        content.lines().skip(1).find_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 || fields[0] != interface || fields[1] != "00000000" {
                return None;
            }

            // Gateway is hex in host byte order
            let gateway = u32::from_str_radix(fields[2], 16).ok()?;
            let gateway = Ipv4Addr::from(gateway.to_be());
            (!gateway.is_unspecified()).then_some(gateway)
        })
    }
}

impl Default for ProcRouteReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteReader for ProcRouteReader {
    async fn default_gateway(&self, interface: &str) -> Result<IpAddr, DomainError> {
        let content = fs::read_to_string(&self.route_path).await.map_err(|e| {
            DomainError::RouteTableUnavailable(format!("{}: {}", self.route_path, e))
        })?;

        let gateway = Self::parse(&content, interface)
            .ok_or_else(|| DomainError::GatewayNotFound(interface.to_string()))?;

        debug!(gateway = %gateway, interface, "Default route found");
        Ok(IpAddr::V4(gateway))
    }
}
