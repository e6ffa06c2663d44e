use serde::{Deserialize, Serialize};

use crate::error::{AprioriError, Result};

/// How rules are enumerated from the frequent itemsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSearch {
    /// Consequents are drawn from a pool of previously seen frequent
    /// itemsets, walked level by level.
    #[default]
    ConsequentPool,
    /// Every antecedent/consequent split of every frequent itemset, grown
    /// from single-item consequents and cut off once confidence drops.
    Exhaustive,
}

/// Tunable parameters of one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    /// Largest itemset size to mine. `None` means the width of the first
    /// transaction.
    pub max_len: Option<usize>,
    #[serde(default)]
    pub search: RuleSearch,
}

impl Default for MiningConfig {
    fn default() -> Self {
        MiningConfig {
            min_support: 0.23,
            min_confidence: 0.7,
            max_len: None,
            search: RuleSearch::default(),
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        MiningConfig {
            min_support,
            min_confidence,
            ..Default::default()
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_search(mut self, search: RuleSearch) -> Self {
        self.search = search;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_fraction("min_support", self.min_support)?;
        check_fraction("min_confidence", self.min_confidence)?;
        if self.max_len == Some(0) {
            return Err(AprioriError::InvalidConfig(
                "max_len must be a positive integer".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Accepts values in (0, 1]; NaN fails both comparisons and is rejected.
fn check_fraction(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(AprioriError::InvalidConfig(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MiningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search, RuleSearch::ConsequentPool);
        assert_eq!(config.max_len, None);
    }

    #[test]
    fn bounds_are_inclusive_of_one_only() {
        assert!(MiningConfig::new(1.0, 1.0).validate().is_ok());
        assert!(MiningConfig::new(0.0, 0.5).validate().is_err());
        assert!(MiningConfig::new(0.5, 0.0).validate().is_err());
        assert!(MiningConfig::new(1.01, 0.5).validate().is_err());
        assert!(MiningConfig::new(0.5, -0.1).validate().is_err());
        assert!(MiningConfig::new(f64::NAN, 0.5).validate().is_err());
    }

    #[test]
    fn zero_max_len_is_rejected() {
        let config = MiningConfig::new(0.5, 0.5).with_max_len(0);
        assert!(matches!(
            config.validate(),
            Err(AprioriError::InvalidConfig(_))
        ));
    }

    #[test]
    fn search_deserializes_from_snake_case() {
        let config: MiningConfig = serde_json::from_str(
            r#"{"min_support": 0.4, "min_confidence": 0.6, "max_len": 3, "search": "exhaustive"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            MiningConfig::new(0.4, 0.6)
                .with_max_len(3)
                .with_search(RuleSearch::Exhaustive)
        );
    }
}
