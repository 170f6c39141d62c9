use dashmap::DashMap;
use ferrous_recon_application::ports::TargetPool;
use ferrous_recon_domain::{MacAddress, Target};
use std::net::IpAddr;

/// In-memory target pool shared by every module of a session.
///
/// Keyed by the (IP, MAC) pair: a rebinding shows up as an add of the new
/// pair followed by a remove of the old one, and must not lose the new
/// entry.
#[derive(Default)]
pub struct SessionTargets {
    targets: DashMap<(IpAddr, MacAddress), Target>,
}

impl SessionTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ip: IpAddr, mac: MacAddress) -> Option<Target> {
        self.targets.get(&(ip, mac)).map(|t| t.value().clone())
    }
}

impl TargetPool for SessionTargets {
    fn add_if_absent(&self, ip: IpAddr, mac: MacAddress) -> bool {
        let mut added = false;
        self.targets.entry((ip, mac)).or_insert_with(|| {
            added = true;
            Target::new(ip, mac)
        });
        added
    }

    fn remove(&self, ip: IpAddr, mac: MacAddress) -> bool {
        self.targets.remove(&(ip, mac)).is_some()
    }

    fn snapshot(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = self.targets.iter().map(|t| t.value().clone()).collect();
        targets.sort_by(|a, b| {
            a.ip_address
                .cmp(&b.ip_address)
                .then(a.hw_address.cmp(&b.hw_address))
        });
        targets
    }

    fn len(&self) -> usize {
        self.targets.len()
    }
}
