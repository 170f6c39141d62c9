use ferrous_recon_domain::{MacAddress, Target};
use std::net::IpAddr;

/// Session-owned set of live hosts.
///
/// Each call is atomic on its own; writers from several modules may
/// interleave between calls.
pub trait TargetPool: Send + Sync {
    /// Returns `true` when the pair was not yet known
    fn add_if_absent(&self, ip: IpAddr, mac: MacAddress) -> bool;

    /// Returns `true` when the pair was present
    fn remove(&self, ip: IpAddr, mac: MacAddress) -> bool;

    /// Current targets ordered by IP address
    fn snapshot(&self) -> Vec<Target>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
