use std::fmt;

use thiserror::Error;

/// Local zone type used for every domain managed by this tool
pub const BLOCK_POLICY: &str = "always_null";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum ZonePolicy {
    AlwaysNull,
    Other(
        #[cfg_attr(
            test,
            proptest(strategy = "\"(transparent|static|redirect|deny|refuse|inform|nodefault)\"")
        )]
        String,
    ),
}

impl From<&str> for ZonePolicy {
    fn from(value: &str) -> Self {
        match value {
            BLOCK_POLICY => ZonePolicy::AlwaysNull,
            other => ZonePolicy::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ZonePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZonePolicy::AlwaysNull => f.write_str(BLOCK_POLICY),
            ZonePolicy::Other(policy) => f.write_str(policy),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocalZoneError {
    #[error("expected '<domain> <policy>', got {0} token(s)")]
    UnexpectedTokenCount(usize),
    #[error("empty token")]
    EmptyToken,
}

/// A single entry of the `list_local_zones` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalZone {
    pub domain: String,
    pub policy: ZonePolicy,
}

impl LocalZone {
    pub fn from_listing_line(line: &str) -> Result<Self, LocalZoneError> {
        let tokens: Vec<&str> = line.split(' ').collect();
        let [domain, policy] = tokens.as_slice() else {
            return Err(LocalZoneError::UnexpectedTokenCount(tokens.len()));
        };

        if domain.is_empty() || policy.is_empty() {
            return Err(LocalZoneError::EmptyToken);
        }

        Ok(LocalZone {
            domain: domain.to_string(),
            policy: (*policy).into(),
        })
    }

    pub fn is_managed(&self) -> bool {
        self.policy == ZonePolicy::AlwaysNull
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.policy)
    }
}

/// Selects the domains of all `always_null` zones from the `list_local_zones` output.
///
/// NOTE: zones with the same policy that weren't created by this tool are selected as well
pub fn managed_domains(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| match LocalZone::from_listing_line(line) {
            Ok(zone) => Some(zone),
            Err(e) => {
                tracing::error!("Unexpected format of local zone '{}': {}", line, e);
                None
            }
        })
        .filter(LocalZone::is_managed)
        .map(|zone| zone.domain)
        .collect()
}

/// Formats an input line for the `local_zones` subcommand
pub fn blocking_zone_entry(domain: &str) -> String {
    format!("{}. {}", domain, BLOCK_POLICY)
}
