//! Identity-keyed deduplication
//!
//! Raw proposal payloads repeat reference entities inside many nested arrays
//! (the same mission under several PEOs, the same program outcome under
//! several course-outcome mapping lists). `UniqueIndex` collapses those
//! repetitions into one insertion-ordered entity per natural key.
//!
//! On conflicting payloads for the same key the first-seen record is
//! authoritative and later values are silently dropped, matching the source
//! system's observed behavior.

use std::collections::HashMap;
use std::hash::Hash;

/// An insertion-ordered map from natural key to first-seen canonical record
#[derive(Debug, Clone)]
pub struct UniqueIndex<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    positions: HashMap<K, usize>,
}

impl<K, V> Default for UniqueIndex<K, V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K, V> UniqueIndex<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under a natural key if the key has not been seen.
    ///
    /// # Returns
    /// `true` if the record was inserted, `false` if the key already existed
    /// (the new value is dropped; first-seen wins)
    pub fn insert_first(&mut self, key: K, value: V) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        self.positions.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.values.push(value);
        true
    }

    /// Whether a key has been seen
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Positional index of a key in first-seen order
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// The record stored under a key
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index_of(key).map(|i| &self.values[i])
    }

    /// Number of unique keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Records in first-seen order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    /// Consume the index, yielding records in first-seen order
    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut index = UniqueIndex::new();

        assert!(index.insert_first("M1".to_string(), "first mission"));
        assert!(index.insert_first("M2".to_string(), "second mission"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&"M1".to_string()), Some(&"first mission"));
        assert_eq!(index.index_of(&"M2".to_string()), Some(1));
        assert!(!index.contains(&"M3".to_string()));
    }

    #[test]
    fn test_first_seen_wins_on_conflict() {
        let mut index = UniqueIndex::new();

        assert!(index.insert_first(7, "original statement"));
        assert!(!index.insert_first(7, "conflicting statement"));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&7), Some(&"original statement"));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut index = UniqueIndex::new();
        for key in ["C", "A", "B", "A", "C"] {
            index.insert_first(key.to_string(), key.to_lowercase());
        }

        let ordered: Vec<&String> = index.values().collect();
        assert_eq!(ordered, [&"c".to_string(), &"a".to_string(), &"b".to_string()]);
        assert_eq!(index.index_of(&"C".to_string()), Some(0));
        assert_eq!(index.index_of(&"B".to_string()), Some(2));
    }

    #[test]
    fn test_into_values() {
        let mut index = UniqueIndex::new();
        index.insert_first(1, "one");
        index.insert_first(2, "two");

        assert_eq!(index.into_values(), vec!["one", "two"]);
    }

    #[test]
    fn test_empty() {
        let index: UniqueIndex<String, ()> = UniqueIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
