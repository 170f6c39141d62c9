use ferrous_recon_domain::Config;
use ferrous_recon_infrastructure::system::{HostsFileReader, LinuxArpReader, ProcRouteReader};
use ferrous_recon_infrastructure::targets::SessionTargets;
use std::sync::Arc;

pub struct Adapters {
    pub arp_reader: Arc<LinuxArpReader>,
    pub route_reader: Arc<ProcRouteReader>,
    pub hosts_file: Option<Arc<HostsFileReader>>,
    pub targets: Arc<SessionTargets>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        Self {
            arp_reader: Arc::new(LinuxArpReader::with_path(config.recon.arp_path.as_str())),
            route_reader: Arc::new(ProcRouteReader::with_path(config.recon.route_path.as_str())),
            hosts_file: config.spoof.hosts_file.as_ref().map(|path| {
                Arc::new(HostsFileReader::new(
                    path.as_str(),
                    config.spoof.default_address,
                ))
            }),
            targets: Arc::new(SessionTargets::new()),
        }
    }
}
