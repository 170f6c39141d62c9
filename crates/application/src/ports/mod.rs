mod arp_reader;
mod route_reader;
mod spoof_rule_source;
mod target_pool;

pub use arp_reader::ArpReader;
pub use route_reader::RouteReader;
pub use spoof_rule_source::SpoofRuleSource;
pub use target_pool::TargetPool;
