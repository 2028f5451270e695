//! Ranked name matching for portfolio → holder resolution.
//!
//! The export carries no foreign key between portfolio rows and the
//! holders above them; the only linkage is the holder-name text, which may
//! differ in case or carry extra words (`"Vanguard Group"` under the
//! holder `"Vanguard"`). Resolution therefore runs through a ranked list
//! of strategies instead of a single lookup.

use std::collections::HashMap;

/// The strategy that produced a successful match, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The query equals a registered name byte-for-byte.
    Exact,
    /// The query equals a registered name after lowercase folding.
    CaseFold,
    /// The query contains a registered name, or a registered name contains
    /// the query.
    Substring,
}

/// An insertion-ordered name index with ranked fallback resolution.
///
/// Strategies are tried strongest-first: [`MatchStrategy::Exact`], then
/// [`MatchStrategy::CaseFold`], then [`MatchStrategy::Substring`]. The
/// substring pass scans entries in insertion order and the first hit
/// wins; resolution is deterministic for a given insertion sequence.
#[derive(Debug)]
pub struct NameMatcher<V> {
    entries: Vec<(String, V)>,
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl<V: Copy> NameMatcher<V> {
    /// Creates an empty matcher.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            exact: HashMap::new(),
            folded: HashMap::new(),
        }
    }

    /// Registers a name. When two registrations collide (exactly or after
    /// case folding), the earlier one keeps priority.
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        let idx = self.entries.len();
        self.exact.entry(name.clone()).or_insert(idx);
        self.folded.entry(name.to_lowercase()).or_insert(idx);
        self.entries.push((name, value));
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no names are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `name` through the ranked strategies.
    pub fn resolve(&self, name: &str) -> Option<(V, MatchStrategy)> {
        if name.is_empty() {
            return None;
        }
        if let Some(&idx) = self.exact.get(name) {
            return Some((self.entries[idx].1, MatchStrategy::Exact));
        }
        if let Some(&idx) = self.folded.get(&name.to_lowercase()) {
            return Some((self.entries[idx].1, MatchStrategy::CaseFold));
        }
        self.entries
            .iter()
            .find(|(known, _)| name.contains(known.as_str()) || known.contains(name))
            .map(|(_, value)| (*value, MatchStrategy::Substring))
    }
}

impl<V: Copy> Default for NameMatcher<V> {
    fn default() -> Self {
        Self::new()
    }
}
