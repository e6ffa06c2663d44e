use itertools::Itertools;

use crate::{itemset::Itemset, types::Level};

/// Joins (k-1)-itemsets that agree on everything but their last item.
///
/// `itemsets` are walked in sorted order, so itemsets sharing a prefix are
/// adjacent; each run of a shared prefix contributes one k-itemset per pair
/// of tail items. Pruning is left to the caller.
///
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step(itemsets: &Level) -> Vec<Itemset> {
    let mut final_itemsets: Vec<Itemset> = Vec::new();

    let runs = itemsets.iter().group_by(|itemset| itemset.prefix().to_vec());
    for (prefix, run) in &runs {
        let tail_items: Vec<_> = run.filter_map(Itemset::last).collect();

        for (a, b) in tail_items.into_iter().tuple_combinations() {
            let mut joined = Vec::with_capacity(prefix.len() + 2);
            joined.extend_from_slice(&prefix);
            joined.push(a);
            joined.push(b);
            final_itemsets.push(Itemset::from(joined));
        }
    }

    final_itemsets
}

/// Apriori property: every (k-1)-subset of a frequent k-itemset is frequent.
pub fn satisfies_downward_closure(candidate: &Itemset, prev: &Level) -> bool {
    candidate
        .immediate_subsets()
        .all(|subset| prev.contains(&subset))
}
