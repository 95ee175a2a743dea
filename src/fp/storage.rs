use std::collections::HashMap;

use crate::item::Item;

/// Flat storage for frequent itemsets and their support counts.
///
/// Items of every itemset live back to back in one vector; each itemset is
/// kept sorted so that lookups are insensitive to the order items were
/// discovered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemsets<I> {
    items: Vec<I>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// Frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel<I> {
    pub storage: FrequentItemsets<I>,
    pub itemset_size: usize,
}

impl<I: Item> Default for FrequentItemsets<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FrequentItemsets<I> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    /// Stores `items` with `support`; returns the itemset's index.
    pub fn push(&mut self, mut items: Vec<I>, support: usize) -> usize {
        items.sort_unstable();
        items.dedup();

        let start = self.items.len();
        self.offsets.push((start, items.len()));
        self.items.extend(items);
        self.supports.push(support);

        self.offsets.len() - 1
    }

    pub fn get(&self, idx: usize) -> (&[I], usize) {
        let (start, len) = self.offsets[idx];
        (&self.items[start..start + len], self.supports[idx])
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[I], usize)> + '_ {
        (0..self.len()).map(move |idx| self.get(idx))
    }

    /// Size of the largest itemset, zero when empty.
    pub fn max_itemset_size(&self) -> usize {
        self.offsets.iter().map(|&(_, len)| len).max().unwrap_or(0)
    }

    /// Support of exactly this combination of items, in any order.
    ///
    /// `None` when the combination is not among the stored itemsets; a
    /// prefix or superset never stands in for it.
    pub fn support_of(&self, items: &[I]) -> Option<usize> {
        let mut query = items.to_vec();
        query.sort_unstable();
        query.dedup();
        self.iter()
            .find(|(itemset, _)| *itemset == query.as_slice())
            .map(|(_, support)| support)
    }

    /// Hash index over the stored itemsets, for repeated exact lookups with
    /// sorted keys.
    pub fn support_index(&self) -> HashMap<&[I], usize> {
        self.iter().collect()
    }

    /// Sorts by itemset size, then by items. Gives a canonical order for
    /// comparing results of different runs or engines.
    pub fn sort_canonical(&mut self) {
        let mut entries = self.to_vec();
        entries.sort_unstable_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
        *self = entries.into_iter().collect();
    }

    pub fn to_vec(&self) -> Vec<(Vec<I>, usize)> {
        self.iter()
            .map(|(itemset, support)| (itemset.to_vec(), support))
            .collect()
    }

    pub fn extend_from(&mut self, other: FrequentItemsets<I>) {
        let base = self.items.len();
        self.items.extend(other.items);
        self.offsets
            .extend(other.offsets.into_iter().map(|(start, len)| (base + start, len)));
        self.supports.extend(other.supports);
    }

    /// Splits into one level per itemset size, smallest first. Sizes with no
    /// itemsets yield empty levels.
    pub fn into_levels(self) -> Vec<FrequentLevel<I>> {
        let mut levels: Vec<FrequentLevel<I>> = (1..=self.max_itemset_size())
            .map(FrequentLevel::new)
            .collect();
        for (itemset, support) in self.iter() {
            if let Some(level) = levels.get_mut(itemset.len().wrapping_sub(1)) {
                level.add_itemset(itemset.to_vec(), support);
            }
        }
        levels
    }
}

impl<I: Item> FromIterator<(Vec<I>, usize)> for FrequentItemsets<I> {
    fn from_iter<T: IntoIterator<Item = (Vec<I>, usize)>>(iter: T) -> Self {
        let mut itemsets = Self::new();
        for (items, support) in iter {
            itemsets.push(items, support);
        }
        itemsets
    }
}

impl<I: Item> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: FrequentItemsets::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<I>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.push(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> (&[I], usize) {
        self.storage.get(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = (&[I], usize)> + '_ {
        self.storage.iter()
    }
}
