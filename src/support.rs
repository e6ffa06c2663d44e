use std::collections::HashMap;

use crate::{
    error::{AprioriError, Result},
    itemset::Itemset,
};

/// Support of every itemset found frequent during one mining run.
///
/// Written only by the support counter, and only the first time an itemset
/// qualifies; read-only for rule generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportMap {
    supports: HashMap<Itemset, f64>,
}

impl SupportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `support` unless `itemset` already has one. Returns whether
    /// the entry was added.
    pub fn record(&mut self, itemset: Itemset, support: f64) -> bool {
        match self.supports.entry(itemset) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(support);
                true
            }
        }
    }

    pub fn get(&self, itemset: &Itemset) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    /// Like [`get`](Self::get), but a miss is an internal-consistency error.
    pub fn support(&self, itemset: &Itemset) -> Result<f64> {
        self.get(itemset).ok_or_else(|| AprioriError::MissingSupport {
            itemset: itemset.clone(),
        })
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.supports.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> + '_ {
        self.supports.iter().map(|(itemset, &support)| (itemset, support))
    }
}
