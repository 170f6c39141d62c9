use crate::ports::{ArpReader, TargetPool};
use ferrous_recon_domain::{AddressTable, DomainError, Gateway, TableDelta};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of one discovery cycle
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    /// Fresh snapshot, to be diffed against on the next cycle
    pub snapshot: AddressTable,
    pub added: usize,
    pub removed: usize,
    /// Endpoints other than the gateway answering with the gateway's MAC
    pub gateway_shared: usize,
}

/// Use case: refresh the ARP table and reconcile the target pool with it.
///
/// Runs one cycle of network discovery; the caller keeps the previous
/// snapshot between cycles.
pub struct ReconcileTargetsUseCase {
    arp_reader: Arc<dyn ArpReader>,
    target_pool: Arc<dyn TargetPool>,
    interface: String,
    gateway: Option<Gateway>,
}

impl ReconcileTargetsUseCase {
    pub fn new(
        arp_reader: Arc<dyn ArpReader>,
        target_pool: Arc<dyn TargetPool>,
        interface: impl Into<String>,
    ) -> Self {
        Self {
            arp_reader,
            target_pool,
            interface: interface.into(),
            gateway: None,
        }
    }

    pub fn with_gateway(mut self, gateway: Gateway) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn gateway(&self) -> Option<&Gateway> {
        self.gateway.as_ref()
    }

    pub async fn execute(
        &self,
        previous: Option<&AddressTable>,
    ) -> Result<ReconcileOutcome, DomainError> {
        let current = self.arp_reader.read_arp_table(&self.interface).await?;
        let delta = TableDelta::between(previous, &current);

        let mut outcome = ReconcileOutcome {
            added: delta.added.len(),
            removed: delta.removed.len(),
            ..Default::default()
        };

        if delta.is_empty() {
            debug!(entries = current.len(), "ARP table unchanged");
            outcome.snapshot = current;
            return Ok(outcome);
        }

        if let Some(gateway) = &self.gateway {
            outcome.gateway_shared = delta.added.count_gateway_shared(gateway);
        }

        for (ip, mac) in delta.added {
            if self.target_pool.add_if_absent(ip, mac) {
                debug!(ip = %ip, mac = %mac, "Target added");
            }
        }

        for (ip, mac) in delta.removed {
            if self.target_pool.remove(ip, mac) {
                debug!(ip = %ip, mac = %mac, "Target removed");
            }
        }

        if outcome.gateway_shared > 0 {
            warn!(
                endpoints = outcome.gateway_shared,
                "{} endpoints share the same MAC of the gateway, there might be some IP isolation going on",
                outcome.gateway_shared
            );
        }

        info!(
            added = outcome.added,
            removed = outcome.removed,
            targets = self.target_pool.len(),
            "Target pool reconciled"
        );

        outcome.snapshot = current;
        Ok(outcome)
    }
}
