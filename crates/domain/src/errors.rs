use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    #[error("ARP table unavailable: {0}")]
    ArpTableUnavailable(String),

    #[error("Routing table unavailable: {0}")]
    RouteTableUnavailable(String),

    #[error("Gateway not found on interface {0}")]
    GatewayNotFound(String),

    #[error("Failed to read hosts file {path}: {reason}")]
    HostsFileRead { path: String, reason: String },

    #[error("Invalid command pattern '{pattern}': {reason}")]
    InvalidCommandPattern { pattern: String, reason: String },

    #[error("Unknown or invalid command: {0}")]
    UnknownCommand(String),

    #[error("Module is no longer available: {0}")]
    ModuleUnavailable(String),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Misuse of a module's start/stop contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("{0} already started.")]
    AlreadyRunning(&'static str),

    #[error("{0} already stopped.")]
    AlreadyStopped(&'static str),
}
