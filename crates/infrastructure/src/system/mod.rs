pub mod arp_reader;
pub mod hosts_file;
pub mod route_reader;

pub use arp_reader::LinuxArpReader;
pub use hosts_file::{parse_hosts, HostsFileReader};
pub use route_reader::ProcRouteReader;
