#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_recon_application::ports::{ArpReader, TargetPool};
use ferrous_recon_application::use_cases::{ReconcileTargetsUseCase, ShowTargetsUseCase};
use ferrous_recon_domain::{AddressTable, DomainError, MacAddress, Target};
use ferrous_recon_jobs::NetReconModule;
use std::collections::BTreeSet;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn table(entries: &[(&str, &str)]) -> AddressTable {
    entries
        .iter()
        .map(|(ip, mac)| (ip.parse().unwrap(), mac.parse().unwrap()))
        .collect()
}

pub struct MockArpReader {
    table: Mutex<AddressTable>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockArpReader {
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            table: Mutex::new(table(entries)),
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_entries(&self, entries: &[(&str, &str)]) {
        *self.table.lock().unwrap() = table(entries);
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArpReader for MockArpReader {
    async fn read_arp_table(&self, _interface: &str) -> Result<AddressTable, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ArpTableUnavailable("ARP read failed".to_string()));
        }
        Ok(self.table.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MockTargetPool {
    entries: Mutex<BTreeSet<(IpAddr, MacAddress)>>,
}

impl MockTargetPool {
    pub fn new() -> Self {
        Self::default()
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
        self.entries.lock().unwrap().insert((ip, mac))
    }

    fn remove(&self, ip: IpAddr, mac: MacAddress) -> bool {
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

pub fn make_module(
    arp: Arc<MockArpReader>,
    pool: Arc<MockTargetPool>,
    interval: Duration,
) -> Arc<NetReconModule> {
    let reconcile = Arc::new(ReconcileTargetsUseCase::new(arp, pool.clone(), "eth0"));
    let show = Arc::new(ShowTargetsUseCase::new(pool));
    Arc::new(NetReconModule::new(reconcile, show).with_interval(interval))
}
