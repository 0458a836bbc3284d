use std::collections::BTreeMap;
use std::collections::btree_map;

/// A sparse, explicitly-positioned collection of clause elements.
///
/// Positions need not be contiguous; iteration is always in ascending
/// position order, whatever order the entries were inserted in. Inserting at
/// an occupied position replaces the earlier value.
///
/// # Example
/// ```
/// use sqlchain::{FragmentSet, Value};
///
/// let mut conds: FragmentSet<Value> = FragmentSet::new();
/// conds.insert(1, "BarcodeID=22");
/// conds.insert(0, "CategoryID=3 OR");
/// assert_eq!(conds.positions().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct FragmentSet<V> {
    entries: BTreeMap<usize, V>,
}

impl<V> Default for FragmentSet<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> FragmentSet<V> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a plain sequence, positioned 0, 1, 2, ...
    pub fn from_seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<V>,
    {
        items.into_iter().enumerate().collect()
    }

    /// Insert `value` at `position`, returning the value it replaced.
    pub fn insert(&mut self, position: usize, value: impl Into<V>) -> Option<V> {
        self.entries.insert(position, value.into())
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn with(mut self, position: usize, value: impl Into<V>) -> Self {
        self.insert(position, value);
        self
    }

    pub fn get(&self, position: usize) -> Option<&V> {
        self.entries.get(&position)
    }

    pub fn remove(&mut self, position: usize) -> Option<V> {
        self.entries.remove(&position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occupied positions, ascending.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Values in ascending position order.
    pub fn values(&self) -> btree_map::Values<'_, usize, V> {
        self.entries.values()
    }

    /// `(position, value)` pairs in ascending position order.
    pub fn iter(&self) -> btree_map::Iter<'_, usize, V> {
        self.entries.iter()
    }
}

impl<V, T: Into<V>> FromIterator<(usize, T)> for FragmentSet<V> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (position, value) in iter {
            set.insert(position, value);
        }
        set
    }
}

impl<V, T: Into<V>> Extend<(usize, T)> for FragmentSet<V> {
    fn extend<I: IntoIterator<Item = (usize, T)>>(&mut self, iter: I) {
        for (position, value) in iter {
            self.insert(position, value);
        }
    }
}

impl<V, T: Into<V>, const N: usize> From<[(usize, T); N]> for FragmentSet<V> {
    fn from(entries: [(usize, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, V> IntoIterator for &'a FragmentSet<V> {
    type Item = (&'a usize, &'a V);
    type IntoIter = btree_map::Iter<'a, usize, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V> IntoIterator for FragmentSet<V> {
    type Item = (usize, V);
    type IntoIter = btree_map::IntoIter<usize, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
