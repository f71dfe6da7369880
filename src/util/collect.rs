use std::collections::btree_map::{self, BTreeMap};
use std::collections::hash_map::{self, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use thiserror::Error;

/// A key showed up twice while building a map
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Duplicate key {key:?} (attempted merging values {existing:?} and {incoming:?})")]
pub struct DuplicateKey<K: Debug, V: Debug> {
    pub key: K,
    pub existing: V,
    pub incoming: V,
}

/// Maps that can refuse to overwrite an existing key
pub trait UniqueMap<K: Debug, V: Debug>: Default {
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>>;
}

impl<K, V, S> UniqueMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash + Debug,
    V: Debug,
    S: BuildHasher + Default,
{
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        match self.entry(key) {
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
            hash_map::Entry::Occupied(slot) => {
                // The map is abandoned on error, so the stored pair can move out
                let (key, existing) = slot.remove_entry();
                Err(DuplicateKey {
                    key,
                    existing,
                    incoming: value,
                })
            }
        }
    }
}

impl<K, V> UniqueMap<K, V> for BTreeMap<K, V>
where
    K: Ord + Debug,
    V: Debug,
{
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        match self.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
            btree_map::Entry::Occupied(slot) => {
                let (key, existing) = slot.remove_entry();
                Err(DuplicateKey {
                    key,
                    existing,
                    incoming: value,
                })
            }
        }
    }
}

/// Collect `(key, value)` pairs, failing on the first repeated key
pub trait UniqueMapExt<K: Debug, V: Debug>: Iterator<Item = (K, V)> + Sized {
    fn try_collect_unique<M: UniqueMap<K, V>>(self) -> Result<M, DuplicateKey<K, V>> {
        let mut map = M::default();
        for (key, value) in self {
            map.insert_unique(key, value)?;
        }
        Ok(map)
    }
}

impl<I, K: Debug, V: Debug> UniqueMapExt<K, V> for I where I: Iterator<Item = (K, V)> {}

/// Fold `right` into `left`, failing on the first key present in both
pub fn merge_unique<K, V, M>(mut left: M, right: M) -> Result<M, DuplicateKey<K, V>>
where
    K: Debug,
    V: Debug,
    M: UniqueMap<K, V> + IntoIterator<Item = (K, V)>,
{
    for (key, value) in right {
        left.insert_unique(key, value)?;
    }
    Ok(left)
}
