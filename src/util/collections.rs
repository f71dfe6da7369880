use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

/// Freeze a set into a shared immutable one. An existing `Arc` is returned
/// as-is rather than wrapped again.
pub fn frozen_set<V>(set: impl Into<Arc<HashSet<V>>>) -> Arc<HashSet<V>> {
    set.into()
}

/// Map counterpart of [`frozen_set`]
pub fn frozen_map<K, V>(map: impl Into<Arc<HashMap<K, V>>>) -> Arc<HashMap<K, V>> {
    map.into()
}

/// List counterpart of [`frozen_set`]
pub fn frozen_list<V>(list: impl Into<Arc<[V]>>) -> Arc<[V]> {
    list.into()
}

/// Union of several sets.
///
/// When every input but one is empty, that input is returned without copying.
pub fn union<V>(
    first: &Arc<HashSet<V>>,
    second: &Arc<HashSet<V>>,
    more: &[Arc<HashSet<V>>],
) -> Arc<HashSet<V>>
where
    V: Eq + Hash + Clone,
{
    let non_empty: Vec<&Arc<HashSet<V>>> = more.iter().filter(|set| !set.is_empty()).collect();

    match non_empty.as_slice() {
        [] if second.is_empty() => return Arc::clone(first),
        [] if first.is_empty() => return Arc::clone(second),
        [only] if first.is_empty() && second.is_empty() => return Arc::clone(only),
        _ => {}
    }

    let mut merged: HashSet<V> = first.iter().cloned().collect();
    merged.extend(second.iter().cloned());
    for set in non_empty {
        merged.extend(set.iter().cloned());
    }
    Arc::new(merged)
}

pub fn as_set<V, I>(items: I) -> HashSet<V>
where
    V: Eq + Hash,
    I: IntoIterator<Item = V>,
{
    items.into_iter().collect()
}
