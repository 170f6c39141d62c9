pub mod detect_gateway;
pub mod reconcile_targets;
pub mod show_targets;

pub use detect_gateway::DetectGatewayUseCase;
pub use reconcile_targets::{ReconcileOutcome, ReconcileTargetsUseCase};
pub use show_targets::ShowTargetsUseCase;
