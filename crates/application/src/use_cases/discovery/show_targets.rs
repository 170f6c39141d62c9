use crate::ports::TargetPool;
use ferrous_recon_domain::Target;
use std::sync::Arc;
use tracing::info;

/// Use case: dump the current target pool through the log
pub struct ShowTargetsUseCase {
    target_pool: Arc<dyn TargetPool>,
}

impl ShowTargetsUseCase {
    pub fn new(target_pool: Arc<dyn TargetPool>) -> Self {
        Self { target_pool }
    }

    pub fn execute(&self) -> Vec<Target> {
        let targets = self.target_pool.snapshot();

        info!(total = targets.len(), "Known targets");
        for target in &targets {
            info!(
                ip = %target.ip_address,
                mac = %target.hw_address,
                first_seen = %target.first_seen.format("%Y-%m-%d %H:%M:%S"),
                "  {} : {}",
                target.ip_address,
                target.hw_address
            );
        }

        targets
    }
}
