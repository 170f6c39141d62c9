use globset::{Glob, GlobMatcher};
use std::net::IpAddr;

/// Which requesting clients a rule applies to.
///
/// Rules without a client column use `Any`. A `".*"` glob is not a
/// substitute: glob syntax treats the dot literally.
#[derive(Debug, Clone)]
pub enum ClientMatch {
    Any,
    Pattern {
        literal: String,
        glob: Option<GlobMatcher>,
    },
}

impl ClientMatch {
    pub fn pattern(client: &str) -> Self {
        Self::Pattern {
            literal: client.to_string(),
            glob: compile_glob(client),
        }
    }

    pub fn matches(&self, client: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern { literal, glob } => {
                literal == client || glob.as_ref().is_some_and(|g| g.is_match(client))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Pattern { literal, .. } => literal,
        }
    }
}

/// One line of a spoof hosts file.
#[derive(Debug, Clone)]
pub struct SpoofRule {
    pub host: String,
    /// Always starts with `.`
    pub suffix: String,
    pub host_glob: Option<GlobMatcher>,
    pub client: ClientMatch,
    /// `None` when the source line carried a malformed IP literal.
    pub address: Option<IpAddr>,
}

impl SpoofRule {
    pub fn new(host: &str, address: Option<IpAddr>, client: ClientMatch) -> Self {
        let suffix = if host.starts_with('.') {
            host.to_string()
        } else {
            format!(".{}", host)
        };

        Self {
            host: host.to_string(),
            suffix,
            host_glob: compile_glob(host),
            client,
            address,
        }
    }

    pub fn matches_host(&self, name: &str) -> bool {
        self.host == name
            || name.ends_with(&self.suffix)
            || self.host_glob.as_ref().is_some_and(|g| g.is_match(name))
    }

    pub fn matches_client(&self, client: &str) -> bool {
        self.client.matches(client)
    }
}

fn compile_glob(pattern: &str) -> Option<GlobMatcher> {
    Glob::new(pattern).ok().map(|glob| glob.compile_matcher())
}

/// Ordered rule set; file order is match precedence.
#[derive(Debug, Clone, Default)]
pub struct SpoofRules {
    rules: Vec<SpoofRule>,
}

impl SpoofRules {
    pub fn new(rules: Vec<SpoofRule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpoofRule> {
        self.rules.iter()
    }

    /// Address of the first rule matching both `name` and `client`.
    ///
    /// Evaluation stops at the first firing rule, even when that rule has no
    /// usable address; later, broader rules never override an earlier one.
    pub fn resolve(&self, name: &str, client: &str) -> Option<IpAddr> {
        self.rules
            .iter()
            .find(|rule| rule.matches_host(name) && rule.matches_client(client))
            .and_then(|rule| rule.address)
    }
}

impl FromIterator<SpoofRule> for SpoofRules {
    fn from_iter<I: IntoIterator<Item = SpoofRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
