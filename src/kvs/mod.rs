//! Sortable key/value pair collections. Map iteration order is unstable, so
//! anything that ends up in chart labels goes through a [SortedPairs] and an
//! explicit [sort::sort] call before being read out.

pub mod sort;

use std::collections::HashMap;

use sort::Sortable;

/// A single key/value entry of a [SortedPairs].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<K, V> {
    pub key: K,
    pub val: V,
}

/// Which field of a pair drives the comparison contract. Fixed at
/// construction, applied only when a sort actually runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrder {
    ByKey,
    ByValue,
}

/// Pairs pulled out of a map, unique by construction. Holding them in a
/// vector keeps the order deterministic once sorted; the map they came from
/// guarantees nothing about iteration order.
///
/// `keys`/`values` return whatever order the backing vector currently has.
/// Run [sort::sort] on the collection first if sorted output is expected.
#[derive(Debug, Clone)]
pub struct SortedPairs<K, V> {
    pairs: Vec<Pair<K, V>>,
    order: PairOrder,
}

impl<K: PartialOrd, V: PartialOrd> SortedPairs<K, V> {
    pub fn from_map(map: HashMap<K, V>, order: PairOrder) -> Self {
        let pairs = map
            .into_iter()
            .map(|(key, val)| Pair { key, val })
            .collect();
        Self { pairs, order }
    }

    pub fn append(&mut self, pair: Pair<K, V>) {
        self.pairs.push(pair);
    }

    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.pairs.iter().map(|p| p.key.clone()).collect()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.pairs.iter().map(|p| p.val.clone()).collect()
    }

    /// Returns a new collection without the pairs for which `exclude`
    /// returns true. Retained pairs keep their relative order, the original
    /// collection is left untouched.
    pub fn filter(&self, mut exclude: impl FnMut(&Pair<K, V>, usize) -> bool) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut pairs = Vec::with_capacity(self.pairs.len());
        for (i, pair) in self.pairs.iter().enumerate() {
            if !exclude(pair, i) {
                pairs.push(pair.clone());
            }
        }
        Self {
            pairs,
            order: self.order,
        }
    }
}

impl<K: PartialOrd, V: PartialOrd> Sortable for SortedPairs<K, V> {
    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        match self.order {
            PairOrder::ByKey => self.pairs[i].key < self.pairs[j].key,
            PairOrder::ByValue => self.pairs[i].val < self.pairs[j].val,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.pairs.swap(i, j);
    }
}
