use std::{
    borrow::Borrow,
    cmp::Eq,
    hash::Hash,
    collections::HashMap,
    slice::Iter,
};

/// Keyed collection that remembers insertion order.
pub struct Dict<K, V> {
    values: Vec<V>,
    map: HashMap<K, usize>,
}

impl<K: Hash + Eq, V> Dict<K, V> {
    pub fn new() -> Self {
        Dict {
            values: Vec::new(),
            map: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn ref_values(&self) -> &Vec<V> {
        &self.values
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.values.iter()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&idx| &self.values[idx])
    }

    /// Caller guarantees `key` is not present yet.
    pub fn insert_uncheck(&mut self, key: K, value: V) -> &V {
        let idx = self.values.len();
        assert!(self.map.insert(key, idx).is_none());
        self.values.push(value);
        &self.values[idx]
    }
}

impl<K: Hash + Eq, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
