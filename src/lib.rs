//! Frequent itemsets and association rules with the level-wise Apriori
//! algorithm.
//!
//! ```no_run
//! use apriori::{apriori, MiningConfig};
//!
//! let transactions = vec![
//!     vec!["bread", "yogurt"],
//!     vec!["bread", "milk", "cereal", "eggs"],
//!     vec!["yogurt", "milk", "cereal", "cheese"],
//!     vec!["bread", "yogurt", "milk", "cereal"],
//!     vec!["bread", "yogurt", "milk", "cheese"],
//! ];
//! let mined = apriori(&transactions, &MiningConfig::new(0.4, 0.7)).unwrap();
//! for rule in &mined.rules {
//!     println!("{:?}", rule.named(mined.inventory()));
//! }
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod io;
pub mod itemset;
pub mod itemsets;
pub mod report;
pub mod rules;
pub mod store;
pub mod support;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

use tracing::info;

pub use config::{MiningConfig, RuleSearch};
pub use error::{AprioriError, Result};
pub use itemset::Itemset;
pub use rules::{NamedRule, Rule};
pub use store::{Inventory, TransactionStore};
pub use support::SupportMap;
pub use types::{FrequentItemsets, ItemId, Level};

/// Output of one mining run.
#[derive(Debug, Clone)]
pub struct Mined {
    pub store: TransactionStore,
    pub levels: FrequentItemsets,
    pub supports: SupportMap,
    pub rules: Vec<Rule>,
}

impl Mined {
    pub fn inventory(&self) -> &Inventory {
        self.store.inventory()
    }

    /// Levels up to, not including, the first empty one. No later level can
    /// be non-empty, since each frequent itemset has frequent subsets.
    pub fn non_empty_levels(&self) -> impl Iterator<Item = &Level> + '_ {
        self.levels.iter().take_while(|level| !level.is_empty())
    }
}

/// Apriori algorithm for association rules.
///
/// Validates `config`, interns `transactions`, mines frequent itemsets up to
/// `config.max_len` (the width of the first transaction when unset) and
/// derives the rules.
pub fn apriori<S: AsRef<str>>(transactions: &[Vec<S>], config: &MiningConfig) -> Result<Mined> {
    config.validate()?;
    let store = TransactionStore::from_raw(transactions)?;
    mine(store, config)
}

/// [`apriori`] over an already interned store.
pub fn mine(store: TransactionStore, config: &MiningConfig) -> Result<Mined> {
    config.validate()?;
    if store.is_empty() {
        return Err(AprioriError::EmptyDataset);
    }

    let max_len = config.max_len.unwrap_or_else(|| store.width());
    info!(
        transactions = store.len(),
        items = store.inventory().len(),
        max_len,
        min_support = config.min_support,
        "mining frequent itemsets"
    );
    let (levels, supports) =
        itemsets::generate_frequent_itemsets(&store, max_len, config.min_support)?;

    info!("Creating rules");
    let rules = rules::generate_rules(&levels, &supports, config.min_confidence, config.search)?;
    info!(rules = rules.len(), "mining done");

    Ok(Mined {
        store,
        levels,
        supports,
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected_before_mining() {
        let transactions = vec![vec!["a"]];
        let result = apriori(&transactions, &MiningConfig::new(0.0, 0.5));
        assert!(matches!(result, Err(AprioriError::InvalidConfig(_))));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let transactions: Vec<Vec<&str>> = vec![];
        let result = apriori(&transactions, &MiningConfig::new(0.5, 0.5));
        assert!(matches!(result, Err(AprioriError::EmptyDataset)));
    }

    #[test]
    fn max_len_defaults_to_first_transaction_width() {
        let transactions = vec![vec!["a", "b"], vec!["a", "b", "c"]];
        let mined = apriori(&transactions, &MiningConfig::new(0.5, 0.5)).unwrap();
        assert_eq!(mined.levels.len(), 2);
    }

    #[test]
    fn non_empty_levels_stop_at_first_gap() {
        let transactions = vec![vec!["a", "b", "c"], vec!["a"], vec!["b"]];
        let mined = apriori(&transactions, &MiningConfig::new(0.6, 0.5)).unwrap();
        assert_eq!(mined.levels.len(), 3);
        assert_eq!(mined.non_empty_levels().count(), 1);
    }
}
