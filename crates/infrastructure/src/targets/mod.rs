pub mod session_targets;

pub use session_targets::SessionTargets;
