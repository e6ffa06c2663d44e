use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::RuleSearch,
    error::Result,
    itemset::Itemset,
    itemsets::create_ck,
    rules::rule::Rule,
    support::SupportMap,
    types::{FrequentItemsets, Level},
};

/// Generate rules based on frequent itemsets
pub fn generate_rules(
    levels: &FrequentItemsets,
    supports: &SupportMap,
    min_conf: f64,
    search: RuleSearch,
) -> Result<Vec<Rule>> {
    let rules = match search {
        RuleSearch::ConsequentPool => consequent_pool(levels, supports, min_conf)?,
        RuleSearch::Exhaustive => exhaustive(levels, supports, min_conf)?,
    };
    debug!(rules = rules.len(), ?search, "generated rules");
    Ok(rules)
}

/// Walks the levels in ascending size. Every frequent itemset seen so far is
/// a candidate consequent for the itemsets that follow it; a rule is emitted
/// for each pooled strict subset whose split meets `min_conf`.
pub fn consequent_pool(
    levels: &FrequentItemsets,
    supports: &SupportMap,
    min_conf: f64,
) -> Result<Vec<Rule>> {
    let mut pool: Vec<&Itemset> = Vec::new();
    let mut seen: HashSet<(Itemset, Itemset)> = HashSet::new();
    let mut rules = Vec::new();

    for freq_set in levels.iter().flatten() {
        let freq_support = supports.support(freq_set)?;

        for &sub_set in pool.iter() {
            if !sub_set.is_strict_subset_of(freq_set) {
                continue;
            }

            let antecedent = freq_set.difference(sub_set);
            let confidence = freq_support / supports.support(&antecedent)?;
            if confidence < min_conf {
                continue;
            }

            let rule = Rule {
                antecedent,
                consequent: sub_set.clone(),
                confidence,
            };
            if seen.insert(rule.key()) {
                rules.push(rule);
            }
        }

        pool.push(freq_set);
    }

    Ok(rules)
}

/// Every split of every frequent itemset of size two or more. Itemsets are
/// searched in parallel; the output keeps the level order.
pub fn exhaustive(
    levels: &FrequentItemsets,
    supports: &SupportMap,
    min_conf: f64,
) -> Result<Vec<Rule>> {
    let patterns: Vec<&Itemset> = levels
        .iter()
        .flatten()
        .filter(|itemset| itemset.len() > 1)
        .collect();

    let per_pattern: Vec<Vec<Rule>> = patterns
        .par_iter()
        .map(|pattern| rules_from_pattern(pattern, supports, min_conf))
        .collect::<Result<_>>()?;

    Ok(per_pattern.into_iter().flatten().collect())
}

/// Splits of one itemset, growing consequents one item at a time.
///
/// Moving items from the antecedent to the consequent can only lower
/// confidence, so only consequents whose rule qualified are extended, and a
/// larger consequent is tried only if all of its one-smaller subsets
/// qualified.
pub fn rules_from_pattern(
    pattern: &Itemset,
    supports: &SupportMap,
    min_conf: f64,
) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    let mut consequents: Level = pattern
        .iter()
        .map(|&item| Itemset::singleton(item))
        .collect();
    let mut size = 1;

    while !consequents.is_empty() && size < pattern.len() {
        let mut qualified = Level::new();

        for consequent in consequents {
            let antecedent = pattern.difference(&consequent);
            let rule = Rule::evaluate(antecedent, consequent, supports)?;
            if rule.confidence >= min_conf {
                qualified.insert(rule.consequent.clone());
                rules.push(rule);
            }
        }

        size += 1;
        consequents = create_ck(&qualified, size);
    }

    Ok(rules)
}
