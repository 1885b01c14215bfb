//! Insertion-ordered word counting and top-N ranking.

use std::collections::HashMap;

use serde::{ser::SerializeMap, Serialize, Serializer};

/// Running word counts that remember the order words were first seen.
#[derive(Debug, Default)]
pub(crate) struct WordTally {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl WordTally {
    pub(crate) fn record(&mut self, word: &str) {
        if let Some(&slot) = self.index.get(word) {
            self.counts[slot].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.counts.len());
            self.counts.push((word.to_string(), 1));
        }
    }

    /// Highest counts first. Ties keep first-seen order because the sort is stable.
    pub(crate) fn into_top(self, n: usize) -> WordFrequencyTable {
        let mut entries = self.counts;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        WordFrequencyTable { entries }
    }
}

/// Ranked word → count table. Serializes as a JSON object in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, u64)>,
}

impl WordFrequencyTable {
    #[must_use]
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}
