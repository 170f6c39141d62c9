use async_trait::async_trait;
use ferrous_recon_domain::DomainError;
use std::net::IpAddr;

/// Probe for the kernel routing table
#[async_trait]
pub trait RouteReader: Send + Sync {
    /// Next hop of the default route leaving through `interface`
    async fn default_gateway(&self, interface: &str) -> Result<IpAddr, DomainError>;
}
