use std::fmt::{Debug, Formatter, Result};

use crate::types::ItemId;

/// An immutable set of items, stored as a sorted, deduplicated vector so that
/// equality, hashing and ordering are structural and order-independent.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn new<I: IntoIterator<Item = ItemId>>(items: I) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Itemset(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Itemset(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.0.iter()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.is_within(&other.0)
    }

    /// Merge walk against `sorted`, which must be ascending and free of
    /// duplicates, like a stored transaction.
    pub fn is_within(&self, sorted: &[ItemId]) -> bool {
        if self.len() > sorted.len() {
            return false;
        }
        let mut theirs = sorted.iter();
        'outer: for item in self.0.iter() {
            for candidate in theirs.by_ref() {
                if candidate == item {
                    continue 'outer;
                }
                if candidate > item {
                    return false;
                }
            }
            return false;
        }
        true
    }

    pub fn is_strict_subset_of(&self, other: &Itemset) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        self.0.iter().all(|item| !other.contains(*item))
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::new(self.0.iter().chain(other.0.iter()).copied())
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset(
            self.0
                .iter()
                .copied()
                .filter(|item| !other.contains(*item))
                .collect(),
        )
    }

    /// The (k-1)-subset obtained by dropping the item at `index`.
    pub fn without_index(&self, index: usize) -> Itemset {
        let mut items = self.0.clone();
        items.remove(index);
        Itemset(items)
    }

    /// All subsets one item smaller than `self`.
    pub fn immediate_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.len()).map(move |index| self.without_index(index))
    }

    /// Everything but the last (largest) item.
    pub fn prefix(&self) -> &[ItemId] {
        match self.0.split_last() {
            Some((_, prefix)) => prefix,
            None => &[],
        }
    }

    pub fn last(&self) -> Option<ItemId> {
        self.0.last().copied()
    }
}

impl Debug for Itemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl FromIterator<ItemId> for Itemset {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Itemset::new(iter)
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Itemset::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_sorts_and_dedups() {
        let itemset = Itemset::new(vec![3, 1, 2, 3, 1]);
        assert_eq!(itemset.items(), &[1, 2, 3]);
        assert_eq!(itemset, Itemset::from(vec![2, 3, 1]));
    }

    #[test]
    fn subset_tests() {
        let small = Itemset::from(vec![1, 3]);
        let big = Itemset::from(vec![1, 2, 3]);
        assert!(small.is_subset_of(&big));
        assert!(small.is_strict_subset_of(&big));
        assert!(big.is_subset_of(&big));
        assert!(!big.is_strict_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(!Itemset::from(vec![1, 4]).is_subset_of(&big));
        assert!(!Itemset::from(vec![0]).is_subset_of(&big));
        assert!(Itemset::default().is_subset_of(&big));
    }

    #[test]
    fn set_operations() {
        let a = Itemset::from(vec![1, 2, 5]);
        let b = Itemset::from(vec![2, 7]);
        assert_eq!(a.union(&b).items(), &[1, 2, 5, 7]);
        assert_eq!(a.difference(&b).items(), &[1, 5]);
        assert!(!a.is_disjoint(&b));
        assert!(a.is_disjoint(&Itemset::from(vec![3, 4])));
    }

    #[test]
    fn immediate_subsets_drop_one_item_each() {
        let itemset = Itemset::from(vec![1, 2, 3]);
        let subsets: Vec<Itemset> = itemset.immediate_subsets().collect();
        assert_eq!(
            subsets,
            vec![
                Itemset::from(vec![2, 3]),
                Itemset::from(vec![1, 3]),
                Itemset::from(vec![1, 2]),
            ]
        );
    }

    #[test]
    fn prefix_and_last() {
        let itemset = Itemset::from(vec![4, 9, 2]);
        assert_eq!(itemset.prefix(), &[2, 4]);
        assert_eq!(itemset.last(), Some(9));
        assert_eq!(Itemset::default().prefix(), &[] as &[ItemId]);
    }
}
