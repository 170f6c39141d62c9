use crate::ports::SpoofRuleSource;
use arc_swap::ArcSwap;
use ferrous_recon_domain::{DomainError, SpoofRules};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: decide which forged address, if any, answers a query.
///
/// Rules are swapped atomically on reload; lookups never block.
pub struct ResolveSpoofUseCase {
    source: Arc<dyn SpoofRuleSource>,
    rules: ArcSwap<SpoofRules>,
}

impl ResolveSpoofUseCase {
    pub fn new(source: Arc<dyn SpoofRuleSource>) -> Self {
        Self {
            source,
            rules: ArcSwap::from_pointee(SpoofRules::default()),
        }
    }

    /// Reload rules from the source, keeping the current set on failure
    pub async fn reload(&self) -> Result<usize, DomainError> {
        let rules = self.source.load_rules().await?;
        let count = rules.len();
        self.rules.store(Arc::new(rules));

        info!(rules = count, "Spoof rules loaded");
        Ok(count)
    }

    pub fn rules(&self) -> Arc<SpoofRules> {
        self.rules.load_full()
    }

    pub fn execute(&self, name: &str, client: &str) -> Option<IpAddr> {
        let address = self.rules.load().resolve(name, client);

        match address {
            Some(address) => debug!(name, client, address = %address, "Spoofing query"),
            None => debug!(name, client, "No spoof rule matched"),
        }

        address
    }
}
