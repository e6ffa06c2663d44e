use tracing::debug;

use crate::{
    combi::{join_step, satisfies_downward_closure},
    itemset::Itemset,
    store::TransactionStore,
    types::{ItemsetLength, Level},
};

/// Candidate 1-itemsets: every distinct item of every transaction.
pub fn create_c1(store: &TransactionStore) -> Level {
    store
        .transactions()
        .iter()
        .flatten()
        .map(|&item| Itemset::singleton(item))
        .collect()
}

/// Candidate k-itemsets from the frequent (k-1)-itemsets `prev`.
///
/// Pairs sharing their first k-2 sorted items are joined, then any union
/// with an infrequent (k-1)-subset is dropped.
pub fn create_ck(prev: &Level, size: ItemsetLength) -> Level {
    let joined = join_step(prev);
    let num_joined = joined.len();

    let candidates: Level = joined
        .into_iter()
        .filter(|candidate| candidate.len() == size)
        .filter(|candidate| satisfies_downward_closure(candidate, prev))
        .collect();

    debug!(
        size,
        joined = num_joined,
        kept = candidates.len(),
        "generated candidates"
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;

    fn itemset(items: &[usize]) -> Itemset {
        Itemset::from(items.to_vec())
    }

    #[test]
    fn c1_holds_every_distinct_item() {
        let store = TransactionStore::from_ids(&[vec![10, 11], vec![11, 12], vec![12]]).unwrap();
        let c1 = create_c1(&store);
        let inventory = store.inventory();

        assert_eq!(c1.len(), 3);
        for name in ["10", "11", "12"] {
            assert!(c1.contains(&inventory.itemset(&[name]).unwrap()));
        }
    }

    #[test]
    fn c1_of_empty_transactions_is_empty() {
        let store = TransactionStore::from_ids(&[vec![], vec![]]).unwrap();
        assert!(create_c1(&store).is_empty());
    }

    #[test]
    fn ck_from_singletons() {
        let prev = btreeset! { itemset(&[10]), itemset(&[13]), itemset(&[14]) };
        let candidates = create_ck(&prev, 2);

        assert_eq!(
            candidates,
            btreeset! { itemset(&[10, 13]), itemset(&[10, 14]), itemset(&[13, 14]) }
        );
    }

    #[test]
    fn ck_without_shared_prefix_is_empty() {
        let prev = btreeset! { itemset(&[10, 11]), itemset(&[13, 14]) };
        assert!(create_ck(&prev, 3).is_empty());
    }

    #[test]
    fn ck_prunes_infrequent_subsets() {
        // {1,2,3} and {1,3,4} survive the join; {1,2,4} is dropped because
        // {2,4} is not frequent.
        let prev = btreeset! {
            itemset(&[1, 2]),
            itemset(&[1, 3]),
            itemset(&[1, 4]),
            itemset(&[2, 3]),
            itemset(&[3, 4]),
        };
        let candidates = create_ck(&prev, 3);

        assert_eq!(candidates, btreeset! { itemset(&[1, 2, 3]), itemset(&[1, 3, 4]) });
    }

    #[test]
    fn ck_of_empty_level_is_empty() {
        assert!(create_ck(&Level::new(), 4).is_empty());
    }
}
