use std::collections::HashSet;
use std::net::{IpAddr, Ipv6Addr};

/// Set of normalized domains that should be null-routed
pub type Blocklist = HashSet<String>;

/// Every character that ends a line, a lone `\r` included
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

pub fn is_ip_address(token: &str) -> bool {
    if token.parse::<IpAddr>().is_ok() {
        return true;
    }

    // IPv6 address with a zone ID: 'fe80::1%lo0'
    token.split_once('%').is_some_and(|(address, zone_id)| {
        !zone_id.is_empty() && !zone_id.contains('%') && address.parse::<Ipv6Addr>().is_ok()
    })
}

/// Lowercases the domain and removes all trailing dots.
///
/// Returns `None` if nothing is left afterwards (e.g. for `"..."`).
pub fn normalize_domain(token: &str) -> Option<String> {
    let domain = token.trim_end_matches('.');
    (!domain.is_empty()).then(|| domain.to_lowercase())
}

/// Cuts the line at the first unescaped `#`
pub fn strip_comment(line: &str) -> &str {
    let comment_start = line
        .bytes()
        .scan(false, |escaped_symbol, byte| {
            if byte == b'#' && !*escaped_symbol {
                return None;
            }
            *escaped_symbol = byte == b'\\' && !*escaped_symbol;
            Some(())
        })
        .count();

    &line[..comment_start]
}

/// Parses a blocklist in either the hosts(5) format (`<ip> <domain...>`) or
/// the plain format with a single domain per line.
///
/// Duplicates are kept, the caller is expected to collect them into a [`Blocklist`].
pub fn parse_blocklist(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut domains = Vec::new();

    for line in text.split(LINE_BREAKS) {
        let line = strip_comment(line);
        let mut tokens = line.split_whitespace();

        // Skip comments and empty lines
        let Some(first_token) = tokens.next() else {
            continue;
        };

        if is_ip_address(first_token) {
            domains.extend(tokens.filter_map(normalize_domain));
        } else if tokens.next().is_none() {
            domains.extend(normalize_domain(first_token));
        } else {
            tracing::warn!("Unexpected format of line '{}'", line.trim());
        }
    }

    domains
}
