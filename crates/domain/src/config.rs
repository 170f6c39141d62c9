pub mod errors;
pub mod logging;
pub mod recon;
pub mod root;
pub mod spoof;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use recon::ReconConfig;
pub use root::{CliOverrides, Config};
pub use spoof::SpoofConfig;
