use std::collections::HashMap;

use bitvec::prelude::*;
use tracing::debug;

use crate::{
    itemset::Itemset, itemsets::count::CountSupport, store::TransactionStore, types::ItemId,
};

/// Vertical view of a store: for each indexed item, one bit per transaction
/// telling whether that transaction holds it.
///
/// Only the items that are frequent on their own get a column. Every later
/// candidate is built from those, and there are at most
/// `occurrences / (min_support * n)` of them, so the index stays within
/// `occurrences / min_support` bits however many distinct items the data has.
#[derive(Debug)]
pub struct TidSets<'a> {
    store: &'a TransactionStore,
    columns: HashMap<ItemId, BitVec>,
}

impl<'a> TidSets<'a> {
    pub fn new<I: IntoIterator<Item = ItemId>>(store: &'a TransactionStore, items: I) -> Self {
        let mut columns: HashMap<ItemId, BitVec> = items
            .into_iter()
            .map(|item| (item, BitVec::repeat(false, store.len())))
            .collect();

        for (tid, transaction) in store.transactions().iter().enumerate() {
            for item in transaction {
                if let Some(column) = columns.get_mut(item) {
                    column.set(tid, true);
                }
            }
        }

        debug!(
            items = columns.len(),
            transactions = store.len(),
            "indexed transaction ids"
        );
        TidSets { store, columns }
    }

    pub fn num_items(&self) -> usize {
        self.columns.len()
    }

    pub fn size_in_bits(&self) -> usize {
        self.columns.values().map(|column| column.len()).sum()
    }
}

impl CountSupport for TidSets<'_> {
    fn num_transactions(&self) -> usize {
        self.store.len()
    }

    /// Walks the set bits of the first item's column and checks the rest.
    /// Itemsets with an unindexed item are counted against the store.
    fn count(&self, itemset: &Itemset) -> usize {
        let columns: Option<Vec<&BitVec>> = itemset
            .iter()
            .map(|item| self.columns.get(item))
            .collect();

        match columns.as_deref() {
            Some([first, rest @ ..]) => first
                .iter_ones()
                .filter(|&tid| rest.iter().all(|column| column[tid]))
                .count(),
            _ => self.store.count(itemset),
        }
    }
}
