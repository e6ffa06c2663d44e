use std::collections::{BTreeSet, HashMap};

use crate::itemset::Itemset;

pub type ItemId = usize;
pub type ItemName = String;

pub type ReverseLookup = HashMap<ItemName, ItemId>;

/// Dense, sorted, deduplicated item ids of one transaction.
pub type Transaction = Vec<ItemId>;

pub type ItemsetLength = usize;

/// Candidate or frequent itemsets of one size. Ordered so that every
/// traversal (and therefore every report and rule list) is reproducible.
pub type Level = BTreeSet<Itemset>;

/// `levels[k - 1]` holds the frequent k-itemsets.
pub type FrequentItemsets = Vec<Level>;
