pub mod discovery;
pub mod spoof;

pub use discovery::{
    DetectGatewayUseCase, ReconcileOutcome, ReconcileTargetsUseCase, ShowTargetsUseCase,
};
pub use spoof::ResolveSpoofUseCase;
