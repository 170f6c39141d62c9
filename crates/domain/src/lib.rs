//! Ferrous Recon Domain Layer
pub mod address_table;
pub mod config;
pub mod errors;
pub mod mac_address;
pub mod spoof_rule;
pub mod target;

pub use address_table::{AddressTable, TableDelta};
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ReconConfig, SpoofConfig};
pub use errors::{DomainError, LifecycleError};
pub use mac_address::MacAddress;
pub use spoof_rule::{ClientMatch, SpoofRule, SpoofRules};
pub use target::{Gateway, Target};
