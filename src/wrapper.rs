use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{report::Report, AprioriError, MiningConfig};

type PyItemset = (Vec<String>, f64);
type PyLevel = (usize, Vec<PyItemset>);
type PyRule = (Vec<String>, Vec<String>, f64);

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_owned).collect()
}

impl From<AprioriError> for PyErr {
    fn from(err: AprioriError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Apriori algorithm for association rules. Returns the non-empty levels as
/// `(size, [(items, support)])`, then the rules.
#[pyfunction]
#[pyo3(name = "apriori")]
#[pyo3(text_signature = "(transactions, min_support, min_confidence, max_len=None)")]
fn mine_rules(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
    max_len: Option<usize>,
) -> PyResult<(Vec<PyLevel>, Vec<PyRule>)> {
    let config = MiningConfig {
        min_support,
        min_confidence,
        max_len,
        ..Default::default()
    };
    let mined = crate::apriori(&transactions, &config)?;
    let report = Report::new(&mined)?;

    let levels = report
        .levels
        .into_iter()
        .map(|level| {
            let itemsets = level
                .itemsets
                .into_iter()
                .map(|itemset| (owned(itemset.items), itemset.support))
                .collect();
            (level.size, itemsets)
        })
        .collect();

    let rules = report
        .rules
        .into_iter()
        .map(|rule| (owned(rule.antecedent), owned(rule.consequent), rule.confidence))
        .collect();

    Ok((levels, rules))
}

#[pymodule]
fn apriori(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_rules, m)?)?;
    Ok(())
}
