use async_trait::async_trait;
use ferrous_recon_domain::{DomainError, SpoofRules};

#[async_trait]
pub trait SpoofRuleSource: Send + Sync {
    async fn load_rules(&self) -> Result<SpoofRules, DomainError>;
}
