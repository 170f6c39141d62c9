use async_trait::async_trait;
use ferrous_recon_domain::{AddressTable, DomainError};

/// Probe for the kernel's address-resolution table
#[async_trait]
pub trait ArpReader: Send + Sync {
    async fn read_arp_table(&self, interface: &str) -> Result<AddressTable, DomainError>;
}
