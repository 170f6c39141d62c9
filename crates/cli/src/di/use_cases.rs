use super::Adapters;
use ferrous_recon_application::use_cases::{
    DetectGatewayUseCase, ReconcileTargetsUseCase, ResolveSpoofUseCase, ShowTargetsUseCase,
};
use ferrous_recon_domain::Config;
use std::sync::Arc;
use tracing::warn;

pub struct UseCases {
    pub reconcile: Arc<ReconcileTargetsUseCase>,
    pub show_targets: Arc<ShowTargetsUseCase>,
}

impl UseCases {
    pub async fn new(config: &Config, adapters: &Adapters) -> Self {
        let interface = config.recon.interface.as_str();
        let mut reconcile = ReconcileTargetsUseCase::new(
            adapters.arp_reader.clone(),
            adapters.targets.clone(),
            interface,
        );

        let detect_gateway =
            DetectGatewayUseCase::new(adapters.route_reader.clone(), adapters.arp_reader.clone());
        match detect_gateway
            .execute(
                interface,
                config.recon.gateway_ip,
                config.recon.gateway_mac,
            )
            .await
        {
            Ok(gateway) => reconcile = reconcile.with_gateway(gateway),
            Err(e) => warn!(
                error = %e,
                interface,
                "Gateway detection failed, collision warnings disabled"
            ),
        }

        Self {
            reconcile: Arc::new(reconcile),
            show_targets: Arc::new(ShowTargetsUseCase::new(adapters.targets.clone())),
        }
    }

    /// `None` when no hosts file is configured
    pub fn resolve_spoof(adapters: &Adapters) -> Option<Arc<ResolveSpoofUseCase>> {
        adapters
            .hosts_file
            .clone()
            .map(|source| Arc::new(ResolveSpoofUseCase::new(source)))
    }
}
