use ferrous_recon_application::ports::SpoofRuleSource;
use ferrous_recon_domain::{ClientMatch, DomainError};
use ferrous_recon_infrastructure::system::{parse_hosts, HostsFileReader};
use std::io::Write;
use std::net::IpAddr;
use tempfile::NamedTempFile;

const HOSTS: &str = "# spoofed domains
1.1.1.1 *.evil.com
9.9.9.9\tsite.com    10.0.0.5

   bank.com
";

fn ip(addr: &str) -> IpAddr {
    addr.parse().unwrap()
}

fn hosts_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_parse_all_line_forms_in_order() {
    let rules = parse_hosts(HOSTS, Some(ip("6.6.6.6")));
    let rules: Vec<_> = rules.iter().collect();

    assert_eq!(rules.len(), 3);

    assert_eq!(rules[0].host, "*.evil.com");
    assert_eq!(rules[0].address, Some(ip("1.1.1.1")));
    assert!(matches!(rules[0].client, ClientMatch::Any));

    assert_eq!(rules[1].host, "site.com");
    assert_eq!(rules[1].address, Some(ip("9.9.9.9")));
    assert_eq!(rules[1].client.as_str(), "10.0.0.5");

    assert_eq!(rules[2].host, "bank.com");
    assert_eq!(rules[2].suffix, ".bank.com");
    assert_eq!(rules[2].address, Some(ip("6.6.6.6")));
    assert!(matches!(rules[2].client, ClientMatch::Any));
}

#[test]
fn test_parsed_rules_resolve() {
    let rules = parse_hosts(HOSTS, Some(ip("6.6.6.6")));

    assert_eq!(rules.resolve("www.evil.com", "10.0.0.9"), Some(ip("1.1.1.1")));
    assert_eq!(rules.resolve("site.com", "10.0.0.5"), Some(ip("9.9.9.9")));
    assert_eq!(rules.resolve("site.com", "10.0.0.6"), None);
    assert_eq!(rules.resolve("online.bank.com", "10.0.0.6"), Some(ip("6.6.6.6")));
}

#[test]
fn test_two_field_line_matches_any_client() {
    let rules = parse_hosts("9.9.9.9 site.com", None);

    assert_eq!(rules.resolve("site.com", "10.0.0.6"), Some(ip("9.9.9.9")));
    assert_eq!(rules.resolve("site.com", "192.168.1.200"), Some(ip("9.9.9.9")));
}

#[test]
fn test_malformed_address_keeps_rule() {
    let rules = parse_hosts("999.1.1.1 evil.com\n2.2.2.2 good.com\n", None);
    let collected: Vec<_> = rules.iter().collect();

    assert_eq!(collected.len(), 2);
    assert_eq!(collected[0].host, "evil.com");
    assert!(collected[0].address.is_none());
    assert_eq!(collected[1].address, Some(ip("2.2.2.2")));
    assert_eq!(rules.resolve("evil.com", "10.0.0.1"), None);
}

#[test]
fn test_single_field_without_default_address() {
    let rules = parse_hosts("bank.com\n", None);

    assert_eq!(rules.len(), 1);
    assert_eq!(rules.resolve("bank.com", "10.0.0.1"), None);
}

#[test]
fn test_comments_and_blank_lines_only() {
    assert!(parse_hosts("# nothing\n\n   \n  # indented comment\n", None).is_empty());
}

#[tokio::test]
async fn test_load_rules_from_file() {
    let file = hosts_file(HOSTS);
    let reader = HostsFileReader::new(file.path().to_str().unwrap(), Some(ip("6.6.6.6")));

    let rules = reader.load_rules().await.unwrap();

    assert_eq!(rules.len(), 3);
    assert_eq!(rules.resolve("bank.com", "10.0.0.1"), Some(ip("6.6.6.6")));
}

#[tokio::test]
async fn test_missing_hosts_file_is_fatal() {
    let reader = HostsFileReader::new("/nonexistent/hosts", None);

    let result = reader.load_rules().await;

    assert!(matches!(
        result,
        Err(DomainError::HostsFileRead { path, .. }) if path == "/nonexistent/hosts"
    ));
}
