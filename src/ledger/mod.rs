//! Strategy usage ledger
//!
//! Counts how many times each strategy name was requested from one
//! library. Entries keep the order in which names were first seen, which
//! is what breaks ties in [`UsageLedger::most_used`].

use indexmap::IndexMap;

/// Per-library request counter keyed by strategy name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageLedger {
    /// Name -> request count, in first-seen order
    counts: IndexMap<String, usize>,
}

impl UsageLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Count one request for `name` and return its new total
    pub fn record(&mut self, name: &str) -> usize {
        let count = self.counts.entry(name.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Requests recorded for `name` (0 if never seen)
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Owned copy of every entry, in first-seen order
    pub fn snapshot(&self) -> IndexMap<String, usize> {
        self.counts.clone()
    }

    /// Name with the highest count
    ///
    /// Ties go to the name recorded first. `None` when empty.
    pub fn most_used(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (name, &count) in &self.counts {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((name.as_str(), count)),
            }
        }
        best.map(|(name, _)| name)
    }

    /// Sum of all recorded requests
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Distinct names recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been recorded since creation or the last clear
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut ledger = UsageLedger::new();
        assert_eq!(ledger.record("forward"), 1);
        assert_eq!(ledger.record("forward"), 2);
        assert_eq!(ledger.record("reverse"), 1);
        assert_eq!(ledger.count("forward"), 2);
        assert_eq!(ledger.count("paginated"), 0);
        assert_eq!(ledger.total(), 3);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_most_used_prefers_first_recorded_on_tie() {
        let mut ledger = UsageLedger::new();
        assert_eq!(ledger.most_used(), None);

        ledger.record("reverse");
        ledger.record("forward");
        ledger.record("forward");
        ledger.record("reverse");
        assert_eq!(ledger.most_used(), Some("reverse"));

        ledger.record("forward");
        assert_eq!(ledger.most_used(), Some("forward"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut ledger = UsageLedger::new();
        ledger.record("byDate");
        let snapshot = ledger.snapshot();
        ledger.record("byDate");
        ledger.clear();
        assert_eq!(snapshot.get("byDate"), Some(&1));
        assert!(ledger.is_empty());
        assert_eq!(ledger.most_used(), None);
    }
}
