use super::UseCases;
use ferrous_recon_domain::{Config, DomainError};
use ferrous_recon_jobs::{ModuleRegistry, NetReconModule};
use std::sync::Arc;
use std::time::Duration;

pub struct Modules {
    pub registry: ModuleRegistry,
}

impl Modules {
    pub fn new(config: &Config, use_cases: &UseCases) -> Result<Self, DomainError> {
        let net_recon = NetReconModule::new(
            use_cases.reconcile.clone(),
            use_cases.show_targets.clone(),
        )
        .with_interval(Duration::from_secs(config.recon.interval_secs));

        let registry = ModuleRegistry::new().with_module(Arc::new(net_recon))?;

        Ok(Self { registry })
    }
}
