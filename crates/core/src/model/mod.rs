//! Core data model for tracked system-call entry points.
//!
//! Every tracked name carries a single signed counter:
//! - `-1` marks an excluded name, never counted and never reported.
//! - `0` marks an entry point that exists but has no coverage marker yet.
//! - `>0` is the number of coverage markers referencing the name.

pub mod exclusions;

use std::collections::{BTreeMap, BTreeSet};

pub use exclusions::exclusions;

/// Names that have a pre-built probe; used only for membership lookups.
pub type ProbeNameSet = BTreeSet<String>;

/// Counter value for names seeded from the exclusion list.
pub const EXCLUDED: i64 = -1;

/// Map from lowercase entry-point name to its coverage counter.
///
/// Built in three ordered phases: exclusion seeding, entry-point discovery,
/// then marker increments. Iteration is in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMap {
    records: BTreeMap<String, i64>,
}

impl RecordMap {
    pub fn new() -> Self {
        Self { records: BTreeMap::new() }
    }

    /// A map pre-populated with every exclusion-list entry at [`EXCLUDED`].
    pub fn seeded() -> Self {
        Self::with_exclusions(exclusions().iter().copied())
    }

    pub fn with_exclusions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for name in names {
            map.records.insert(name.into(), EXCLUDED);
        }
        map
    }

    /// Record a discovered entry point at count 0.
    ///
    /// Returns `false` without touching the counter when the name is already
    /// tracked, so discovery never overwrites an exclusion.
    pub fn discover(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.records.contains_key(&name) {
            return false;
        }
        self.records.insert(name, 0);
        true
    }

    /// Increment the counter for a marked name.
    ///
    /// Unknown names and excluded names are left alone; returns whether an
    /// increment happened.
    pub fn mark(&mut self, name: &str) -> bool {
        match self.records.get_mut(name) {
            Some(count) if *count != EXCLUDED => {
                *count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, name: &str) -> Option<i64> {
        self.records.get(name).copied()
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.count(name) == Some(EXCLUDED)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of tracked names, excluded ones not included.
    pub fn tracked(&self) -> usize {
        self.records.values().filter(|count| **count != EXCLUDED).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.records.iter().map(|(name, count)| (name.as_str(), *count))
    }
}
