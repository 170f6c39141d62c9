#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_recon_application::ports::{ArpReader, RouteReader, SpoofRuleSource, TargetPool};
use ferrous_recon_domain::{AddressTable, DomainError, MacAddress, SpoofRules, Target};
use std::collections::BTreeSet;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub fn table(entries: &[(&str, &str)]) -> AddressTable {
    entries
        .iter()
        .map(|(ip, mac)| (ip.parse().unwrap(), mac.parse().unwrap()))
        .collect()
}

pub struct MockArpReader {
    table: Arc<RwLock<AddressTable>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
    last_interface: Arc<Mutex<Option<String>>>,
}

impl MockArpReader {
    pub fn new() -> Self {
        Self::with_entries(&[])
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            table: Arc::new(RwLock::new(table(entries))),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
            last_interface: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn set_entries(&self, entries: &[(&str, &str)]) {
        *self.table.write().await = table(entries);
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_interface(&self) -> Option<String> {
        self.last_interface.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArpReader for MockArpReader {
    async fn read_arp_table(&self, interface: &str) -> Result<AddressTable, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_interface.lock().unwrap() = Some(interface.to_string());
        if *self.should_fail.read().await {
            return Err(DomainError::ArpTableUnavailable("ARP read failed".to_string()));
        }
        Ok(self.table.read().await.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolOp {
    Add(IpAddr, MacAddress),
    Remove(IpAddr, MacAddress),
}

pub struct MockTargetPool {
    entries: Mutex<BTreeSet<(IpAddr, MacAddress)>>,
    ops: Mutex<Vec<PoolOp>>,
}

impl MockTargetPool {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeSet::new()),
            ops: Mutex::new(Vec::new()),
        }
    }

    pub fn ops(&self) -> Vec<PoolOp> {
        self.ops.lock().unwrap().clone()
    }

    pub fn contains(&self, ip: &str, mac: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .contains(&(ip.parse().unwrap(), mac.parse().unwrap()))
    }
}

impl TargetPool for MockTargetPool {
    fn add_if_absent(&self, ip: IpAddr, mac: MacAddress) -> bool {
        self.ops.lock().unwrap().push(PoolOp::Add(ip, mac));
        self.entries.lock().unwrap().insert((ip, mac))
    }

    fn remove(&self, ip: IpAddr, mac: MacAddress) -> bool {
        self.ops.lock().unwrap().push(PoolOp::Remove(ip, mac));
        self.entries.lock().unwrap().remove(&(ip, mac))
    }

    fn snapshot(&self) -> Vec<Target> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(ip, mac)| Target::new(*ip, *mac))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

pub struct MockRouteReader {
    gateway: Option<IpAddr>,
    call_count: AtomicU64,
}

impl MockRouteReader {
    pub fn with_gateway(gateway: Option<&str>) -> Self {
        Self {
            gateway: gateway.map(|ip| ip.parse().unwrap()),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RouteReader for MockRouteReader {
    async fn default_gateway(&self, interface: &str) -> Result<IpAddr, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.gateway
            .ok_or_else(|| DomainError::GatewayNotFound(interface.to_string()))
    }
}

pub struct MockSpoofRuleSource {
    rules: Mutex<Result<SpoofRules, DomainError>>,
}

impl MockSpoofRuleSource {
    pub fn with_rules(rules: SpoofRules) -> Self {
        Self {
            rules: Mutex::new(Ok(rules)),
        }
    }

    pub fn set_rules(&self, rules: Result<SpoofRules, DomainError>) {
        *self.rules.lock().unwrap() = rules;
    }
}

#[async_trait]
impl SpoofRuleSource for MockSpoofRuleSource {
    async fn load_rules(&self) -> Result<SpoofRules, DomainError> {
        self.rules.lock().unwrap().clone()
    }
}
