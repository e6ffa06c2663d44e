use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::{AprioriError, Result},
    itemset::Itemset,
    store::TransactionStore,
    support::SupportMap,
    types::Level,
};

/// Anything that can tell how many transactions hold an itemset.
pub trait CountSupport: Sync {
    fn num_transactions(&self) -> usize;

    fn count(&self, itemset: &Itemset) -> usize;
}

impl CountSupport for TransactionStore {
    fn num_transactions(&self) -> usize {
        self.len()
    }

    fn count(&self, itemset: &Itemset) -> usize {
        TransactionStore::count(self, itemset)
    }
}

/// Keeps the candidates whose support reaches `min_support`, recording each
/// survivor's support in `supports`. A candidate held by no transaction is
/// never frequent, whatever the threshold.
///
/// Candidates are counted in parallel; each count is an independent integer,
/// so the outcome is the same as a sequential scan.
pub fn generate_lk<S: CountSupport + ?Sized>(
    store: &S,
    candidates: &Level,
    min_support: f64,
    supports: &mut SupportMap,
) -> Result<Level> {
    if store.num_transactions() == 0 {
        return Err(AprioriError::EmptyDataset);
    }
    if candidates.is_empty() {
        return Ok(Level::new());
    }

    let counts = count_candidates(store, candidates);
    let n = store.num_transactions() as f64;

    let mut frequent = Level::new();
    for (candidate, count) in candidates.iter().zip(counts) {
        let support = count as f64 / n;
        if count > 0 && support >= min_support {
            supports.record(candidate.clone(), support);
            frequent.insert(candidate.clone());
        }
    }

    debug!(
        candidates = candidates.len(),
        frequent = frequent.len(),
        "pruned by support"
    );

    Ok(frequent)
}

/// Transaction counts, in the iteration order of `candidates`.
fn count_candidates<S: CountSupport + ?Sized>(store: &S, candidates: &Level) -> Vec<usize> {
    let candidates: Vec<&Itemset> = candidates.iter().collect();
    candidates
        .par_iter()
        .map(|candidate| store.count(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;

    fn named(store: &TransactionStore, names: &[&str]) -> Itemset {
        store.inventory().itemset(names).unwrap()
    }

    fn singletons(store: &TransactionStore, names: &[&str]) -> Level {
        names.iter().map(|name| named(store, &[*name])).collect()
    }

    #[test]
    fn update_counts() {
        let store = TransactionStore::from_ids(&[vec![0, 1]]).unwrap();
        let candidates = singletons(&store, &["0", "1"]);
        let mut supports = SupportMap::new();

        let frequent = generate_lk(&store, &candidates, 0.5, &mut supports).unwrap();

        assert_eq!(frequent, candidates);
        assert_eq!(supports.get(&named(&store, &["0"])), Some(1.0));
        assert_eq!(supports.get(&named(&store, &["1"])), Some(1.0));
    }

    #[test]
    fn update_counts_with_min_support_1() {
        let store = TransactionStore::from_ids(&[vec![10, 11], vec![10, 12]]).unwrap();
        let candidates = singletons(&store, &["10", "11"]);
        let mut supports = SupportMap::new();

        let frequent = generate_lk(&store, &candidates, 1.0, &mut supports).unwrap();

        assert_eq!(frequent, btreeset! { named(&store, &["10"]) });
        assert_eq!(supports.len(), 1);
        assert_eq!(supports.get(&named(&store, &["10"])), Some(1.0));
    }

    #[test]
    fn update_counts_with_min_support_0_5_1_itemset() {
        let store = TransactionStore::from_ids(&[
            vec![10, 11],
            vec![10, 15],
            vec![10, 12],
            vec![10, 12],
            vec![10, 12],
            vec![11, 12],
        ])
        .unwrap();
        let candidates = singletons(&store, &["10", "11", "12", "15"]);
        let mut supports = SupportMap::new();

        let frequent = generate_lk(&store, &candidates, 0.5, &mut supports).unwrap();

        assert_eq!(
            frequent,
            btreeset! { named(&store, &["10"]), named(&store, &["12"]) }
        );
        assert_eq!(supports.get(&named(&store, &["10"])), Some(5.0 / 6.0));
        assert_eq!(supports.get(&named(&store, &["12"])), Some(4.0 / 6.0));
        assert_eq!(supports.get(&named(&store, &["11"])), None);
    }

    #[test]
    fn update_counts_with_min_support_0_5_2_itemset() {
        let store = TransactionStore::from_ids(&[
            vec![10, 11],
            vec![10, 15],
            vec![10, 13],
            vec![10, 13],
            vec![10, 13],
            vec![11, 13],
        ])
        .unwrap();
        let candidates: Level = [
            ["10", "11"],
            ["10", "13"],
            ["10", "15"],
            ["11", "13"],
            ["11", "15"],
        ]
        .iter()
        .map(|pair| named(&store, pair))
        .collect();
        let mut supports = SupportMap::new();

        let frequent = generate_lk(&store, &candidates, 0.5, &mut supports).unwrap();

        assert_eq!(frequent, btreeset! { named(&store, &["10", "13"]) });
        assert_eq!(supports.get(&named(&store, &["10", "13"])), Some(0.5));
    }

    #[test]
    fn unseen_candidate_counts_zero() {
        let store = TransactionStore::from_ids(&[vec![1, 2], vec![3]]).unwrap();
        let candidates = btreeset! { named(&store, &["1", "3"]) };
        let mut supports = SupportMap::new();

        let frequent = generate_lk(&store, &candidates, 0.1, &mut supports).unwrap();

        assert!(frequent.is_empty());
        assert!(supports.is_empty());
    }

    #[test]
    fn unseen_candidate_is_not_frequent_at_zero_support() {
        let store = TransactionStore::from_ids(&[vec![1, 2], vec![3]]).unwrap();
        let candidates = btreeset! { named(&store, &["1", "3"]), named(&store, &["1", "2"]) };
        let mut supports = SupportMap::new();

        let frequent = generate_lk(&store, &candidates, 0.0, &mut supports).unwrap();

        assert_eq!(frequent, btreeset! { named(&store, &["1", "2"]) });
        assert_eq!(supports.get(&named(&store, &["1", "3"])), None);
    }

    #[test]
    fn existing_supports_are_not_overwritten() {
        let store = TransactionStore::from_ids(&[vec![1], vec![1, 2]]).unwrap();
        let one = named(&store, &["1"]);
        let mut supports = SupportMap::new();
        supports.record(one.clone(), 0.25);

        generate_lk(&store, &btreeset! { one.clone() }, 0.5, &mut supports).unwrap();

        assert_eq!(supports.get(&one), Some(0.25));
    }
}
