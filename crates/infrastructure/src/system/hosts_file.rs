use async_trait::async_trait;
use ferrous_recon_application::ports::SpoofRuleSource;
use ferrous_recon_domain::{ClientMatch, DomainError, SpoofRule, SpoofRules};
use std::net::IpAddr;
use tokio::fs;
use tracing::{debug, warn};

/// Spoof rules read from a hosts-style file.
///
/// ```text
/// # comment
/// 10.0.0.66 *.evil.com
/// 10.0.0.66 www.site.com 192.168.1.23
/// bank.com
/// ```
///
/// Single-column lines answer with the configured default address.
pub struct HostsFileReader {
    path: String,
    default_address: Option<IpAddr>,
}

impl HostsFileReader {
    pub fn new(path: impl Into<String>, default_address: Option<IpAddr>) -> Self {
        Self {
            path: path.into(),
            default_address,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl SpoofRuleSource for HostsFileReader {
    async fn load_rules(&self) -> Result<SpoofRules, DomainError> {
        let content =
            fs::read_to_string(&self.path)
                .await
                .map_err(|e| DomainError::HostsFileRead {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })?;

        let rules = parse_hosts(&content, self.default_address);
        debug!(path = %self.path, rules = rules.len(), "Hosts file parsed");
        Ok(rules)
    }
}

/// Parse hosts-file content, keeping line order.
///
/// A malformed IP literal does not abort the load: the rule is kept
/// without an address, so it matches but never produces an answer.
pub fn parse_hosts(content: &str, default_address: Option<IpAddr>) -> SpoofRules {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_num, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            let (first, rest) = split_field(line);
            let (second, third) = match rest {
                Some(rest) => {
                    let (second, third) = split_field(rest);
                    (Some(second), third)
                }
                None => (None, None),
            };

            let rule = match (second, third) {
                (None, _) => SpoofRule::new(first, default_address, ClientMatch::Any),
                (Some(host), None) => {
                    SpoofRule::new(host, parse_address(first, line_num), ClientMatch::Any)
                }
                (Some(host), Some(client)) => SpoofRule::new(
                    host,
                    parse_address(first, line_num),
                    ClientMatch::pattern(client),
                ),
            };

            Some(rule)
        })
        .collect()
}

/// Split off the first whitespace-delimited field; the remainder keeps
/// its inner whitespace.
fn split_field(s: &str) -> (&str, Option<&str>) {
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => {
            let tail = tail.trim_start();
            (head, (!tail.is_empty()).then_some(tail))
        }
        None => (s, None),
    }
}

fn parse_address(field: &str, line_num: usize) -> Option<IpAddr> {
    match field.parse() {
        Ok(address) => Some(address),
        Err(_) => {
            warn!(line = line_num + 1, address = field, "Invalid IP address in hosts file");
            None
        }
    }
}
