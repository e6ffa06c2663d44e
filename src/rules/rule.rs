use serde::Serialize;

use crate::{error::Result, itemset::Itemset, store::Inventory, support::SupportMap};

/// `antecedent => consequent`, holding with `confidence`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f64,
}

impl Rule {
    /// Scores the split of `antecedent ∪ consequent` with
    /// `support(union) / support(antecedent)`.
    pub fn evaluate(
        antecedent: Itemset,
        consequent: Itemset,
        supports: &SupportMap,
    ) -> Result<Rule> {
        let union_support = supports.support(&antecedent.union(&consequent))?;
        let antecedent_support = supports.support(&antecedent)?;
        Ok(Rule {
            antecedent,
            consequent,
            confidence: union_support / antecedent_support,
        })
    }

    /// The frequent itemset this rule was split from.
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }

    /// Identity used for deduplication.
    pub fn key(&self) -> (Itemset, Itemset) {
        (self.antecedent.clone(), self.consequent.clone())
    }

    pub fn support(&self, supports: &SupportMap) -> Result<f64> {
        supports.support(&self.itemset())
    }

    /// `confidence / support(consequent)`.
    pub fn lift(&self, supports: &SupportMap) -> Result<f64> {
        let consequent_support = supports.support(&self.consequent)?;
        Ok(self.confidence / consequent_support)
    }

    pub fn named<'a>(&self, inventory: &'a Inventory) -> NamedRule<'a> {
        NamedRule {
            antecedent: inventory.names(&self.antecedent),
            consequent: inventory.names(&self.consequent),
            confidence: self.confidence,
        }
    }
}

/// A rule with its items resolved to names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedRule<'a> {
    pub antecedent: Vec<&'a str>,
    pub consequent: Vec<&'a str>,
    pub confidence: f64,
}
