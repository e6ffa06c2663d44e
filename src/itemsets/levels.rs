use tracing::info;

use crate::{
    error::Result,
    itemsets::{
        candidates::{create_c1, create_ck},
        count::generate_lk,
        tidsets::TidSets,
    },
    store::TransactionStore,
    support::SupportMap,
    types::{FrequentItemsets, ItemsetLength},
};

/// Level-wise Apriori pass.
///
/// Level 1 is always produced. Every size from 2 up to `max_len` gets a
/// level, even once the levels have run empty, so `levels.len()` is
/// `max(max_len, 1)`.
///
/// Level 1 is counted against the store. Later levels are counted against a
/// [`TidSets`] index over the frequent single items.
pub fn generate_frequent_itemsets(
    store: &TransactionStore,
    max_len: ItemsetLength,
    min_support: f64,
) -> Result<(FrequentItemsets, SupportMap)> {
    let mut supports = SupportMap::new();
    let mut levels: FrequentItemsets = Vec::with_capacity(max_len.max(1));

    info!("Counting itemsets of length 1.");
    let c1 = create_c1(store);
    let l1 = generate_lk(store, &c1, min_support, &mut supports)?;
    info!(size = 1, frequent = l1.len(), "level done");
    let tidsets = TidSets::new(store, l1.iter().flat_map(|itemset| itemset.iter().copied()));
    levels.push(l1);

    for size in 2..=max_len {
        let prev = &levels[size - 2];
        let lk = if prev.is_empty() {
            Default::default()
        } else {
            info!("Counting itemsets of length {}.", size);
            let ck = create_ck(prev, size);
            generate_lk(&tidsets, &ck, min_support, &mut supports)?
        };
        info!(size, frequent = lk.len(), "level done");
        levels.push(lk);
    }

    Ok((levels, supports))
}
