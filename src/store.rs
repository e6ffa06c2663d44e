use crate::{
    error::{AprioriError, Result},
    itemset::Itemset,
    types::{ItemId, ItemName, ReverseLookup, Transaction},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Two-way table between raw item names and dense item ids. Ids are handed
/// out in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    names: Vec<ItemName>,
    reverse_lookup: ReverseLookup,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            names: Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS),
            reverse_lookup: ReverseLookup::with_capacity(APPROX_NUM_UNIQUE_ITEMS),
        }
    }

    pub fn intern(&mut self, name: &str) -> ItemId {
        if let Some(&item_id) = self.reverse_lookup.get(name) {
            return item_id;
        }
        let item_id = self.names.len();
        self.names.push(name.to_owned());
        self.reverse_lookup.insert(name.to_owned(), item_id);
        item_id
    }

    pub fn id_of(&self, name: &str) -> Option<ItemId> {
        self.reverse_lookup.get(name).copied()
    }

    pub fn name_of(&self, item_id: ItemId) -> Option<&str> {
        self.names.get(item_id).map(String::as_str)
    }

    /// Item names of `itemset`, sorted by name.
    pub fn names(&self, itemset: &Itemset) -> Vec<&str> {
        let mut names: Vec<&str> = itemset
            .iter()
            .filter_map(|&item_id| self.name_of(item_id))
            .collect();
        names.sort_unstable();
        names
    }

    /// Itemset made of the given names; `None` if any name is unknown.
    pub fn itemset<S: AsRef<str>>(&self, names: &[S]) -> Option<Itemset> {
        names
            .iter()
            .map(|name| self.id_of(name.as_ref()))
            .collect::<Option<Vec<ItemId>>>()
            .map(Itemset::from)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Read-only input of one mining run: every transaction as its sorted,
/// deduplicated item ids.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    inventory: Inventory,
    width: usize,
}

impl TransactionStore {
    /// Interns every raw field. Duplicate items within a transaction and the
    /// order of fields do not matter.
    pub fn from_raw<S: AsRef<str>>(raw_transactions: &[Vec<S>]) -> Result<Self> {
        let width = match raw_transactions.first() {
            Some(first) => first.len(),
            None => return Err(AprioriError::EmptyDataset),
        };

        let mut inventory = Inventory::new();
        let transactions: Vec<Transaction> = raw_transactions
            .iter()
            .map(|raw_transaction| {
                let mut items: Transaction = raw_transaction
                    .iter()
                    .map(|item| inventory.intern(item.as_ref()))
                    .collect();
                items.sort_unstable();
                items.dedup();
                items
            })
            .collect();

        Ok(TransactionStore {
            transactions,
            inventory,
            width,
        })
    }

    /// Builds a store straight from item ids, naming each item by its id.
    pub fn from_ids(raw_transactions: &[Vec<ItemId>]) -> Result<Self> {
        let named: Vec<Vec<String>> = raw_transactions
            .iter()
            .map(|transaction| transaction.iter().map(ItemId::to_string).collect())
            .collect();
        Self::from_raw(&named)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Number of raw fields in the first transaction, duplicates included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether transaction `index` contains every item of `itemset`.
    pub fn contains(&self, index: usize, itemset: &Itemset) -> bool {
        self.transactions
            .get(index)
            .is_some_and(|transaction| itemset.is_within(transaction))
    }

    /// Number of transactions containing `itemset`.
    pub fn count(&self, itemset: &Itemset) -> usize {
        self.transactions
            .iter()
            .filter(|transaction| itemset.is_within(transaction))
            .count()
    }
}
