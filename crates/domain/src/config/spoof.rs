use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpoofConfig {
    /// Hosts file with `<ip> <host> [client]` rules
    #[serde(default)]
    pub hosts_file: Option<String>,

    /// Answer used by single-column rules
    #[serde(default)]
    pub default_address: Option<IpAddr>,
}
