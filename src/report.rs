use std::io::Write;

use serde::Serialize;

use crate::{error::Result, Mined};

const BANNER_WIDTH: usize = 50;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub levels: Vec<LevelReport<'a>>,
    pub rules: Vec<RuleReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LevelReport<'a> {
    pub size: usize,
    pub itemsets: Vec<ItemsetReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ItemsetReport<'a> {
    pub items: Vec<&'a str>,
    pub support: f64,
}

#[derive(Debug, Serialize)]
pub struct RuleReport<'a> {
    pub antecedent: Vec<&'a str>,
    pub consequent: Vec<&'a str>,
    pub confidence: f64,
    pub support: f64,
    pub lift: f64,
}

impl<'a> Report<'a> {
    /// Resolves every itemset to names, skipping empty levels.
    pub fn new(mined: &'a Mined) -> Result<Self> {
        let inventory = mined.inventory();

        let levels = mined
            .non_empty_levels()
            .enumerate()
            .map(|(index, level)| {
                let itemsets = level
                    .iter()
                    .map(|itemset| {
                        Ok(ItemsetReport {
                            items: inventory.names(itemset),
                            support: mined.supports.support(itemset)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(LevelReport {
                    size: index + 1,
                    itemsets,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rules = mined
            .rules
            .iter()
            .map(|rule| {
                let named = rule.named(inventory);
                Ok(RuleReport {
                    antecedent: named.antecedent,
                    consequent: named.consequent,
                    confidence: rule.confidence,
                    support: rule.support(&mined.supports)?,
                    lift: rule.lift(&mined.supports)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Report { levels, rules })
    }
}

/// Human-readable listing: each non-empty level with the support of every
/// itemset, then every rule with its confidence.
pub fn write_text<W: Write>(out: &mut W, mined: &Mined) -> Result<()> {
    let report = Report::new(mined)?;
    let banner = "=".repeat(BANNER_WIDTH);

    for level in &report.levels {
        writeln!(out, "{}", banner)?;
        writeln!(out, "frequent {}-itemsets", level.size)?;
        for itemset in &level.itemsets {
            writeln!(out, "{{{}}}", itemset.items.join(", "))?;
            writeln!(out, "Support = {:.4}", itemset.support)?;
        }
    }

    writeln!(out, "{}", banner)?;
    writeln!(out, "Association Rules Are As Follows:")?;
    for rule in &report.rules {
        writeln!(
            out,
            "[{}] --> [{}]",
            rule.antecedent.join(", "),
            rule.consequent.join(", ")
        )?;
        writeln!(out, "Confidence = {:.4}", rule.confidence)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, mined: &Mined) -> Result<()> {
    let report = Report::new(mined)?;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
