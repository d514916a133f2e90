use std::collections::HashSet;

use crate::Blocklist;

/// Domains that must never end up in the resolver, regardless of the blocklists.
///
/// Entries are only trimmed, no normalization is applied to them.
#[derive(Default, Debug, Clone)]
pub struct Whitelist {
    entries: HashSet<String>,
}

impl Whitelist {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Whitelist { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains(domain)
    }

    /// Removes every whitelisted domain from the blocklist
    pub fn apply(&self, mut blocklist: Blocklist) -> Blocklist {
        let initial_len = blocklist.len();
        blocklist.retain(|domain| !self.entries.contains(domain));

        tracing::info!(
            "Whitelist removed {} of {} domains",
            initial_len - blocklist.len(),
            initial_len
        );
        blocklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::arb_domain;
    use proptest::collection::hash_set;
    use proptest::prelude::*;

    #[test]
    fn from_lines_trims_and_skips_empty_lines() {
        let whitelist = Whitelist::from_lines(["  good.example ", "", "   ", "Other.Example"]);
        assert_eq!(whitelist.len(), 2);
        assert!(whitelist.contains("good.example"));
        // No normalization apart from trimming
        assert!(whitelist.contains("Other.Example"));
        assert!(!whitelist.contains("other.example"));
    }

    #[test]
    fn apply_removes_only_whitelisted_domains() {
        let blocklist = Blocklist::from(["ads.example".to_string(), "good.example".to_string()]);
        let whitelist = Whitelist::from_lines(["good.example", "unrelated.example"]);
        assert_eq!(whitelist.apply(blocklist), Blocklist::from(["ads.example".to_string()]));
    }

    #[test]
    fn empty_whitelist_keeps_everything() {
        let blocklist = Blocklist::from(["ads.example".to_string()]);
        assert_eq!(Whitelist::new().apply(blocklist.clone()), blocklist);
    }

    proptest! {
        #[test]
        fn apply_is_a_set_difference(
            blocklist in hash_set(arb_domain(), 0..50),
            whitelist in hash_set(arb_domain(), 0..20),
            shared in hash_set(arb_domain(), 0..10),
        ) {
            let blocklist: Blocklist = blocklist.union(&shared).cloned().collect();
            let whitelist_entries: HashSet<String> = whitelist.union(&shared).cloned().collect();

            let result = Whitelist::from_lines(&whitelist_entries).apply(blocklist.clone());

            prop_assert!(result.iter().all(|domain| !whitelist_entries.contains(domain)));
            prop_assert!(result.iter().all(|domain| blocklist.contains(domain)));
            prop_assert_eq!(result, &blocklist - &whitelist_entries);
        }
    }
}
