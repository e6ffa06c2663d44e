use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AprioriError, Result};

pub type RawTransaction = Vec<String>;

/// Reads one transaction per line from a delimited flat file.
pub fn read_transactions<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<RawTransaction>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let transactions = read_transactions_from(BufReader::new(file), delimiter)?;
    info!(
        path = %path.display(),
        transactions = transactions.len(),
        "loaded dataset"
    );
    Ok(transactions)
}

/// Same as [`read_transactions`], for any buffered source. Blank lines are
/// skipped; a source without a single transaction is an empty dataset.
pub fn read_transactions_from<R: BufRead>(
    reader: R,
    delimiter: char,
) -> Result<Vec<RawTransaction>> {
    let mut transactions = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line, delimiter) {
            Some(transaction) => transactions.push(transaction),
            None => debug!(line = number + 1, "skipping blank line"),
        }
    }

    if transactions.is_empty() {
        return Err(AprioriError::EmptyDataset);
    }
    Ok(transactions)
}

/// Splits a line into trimmed, non-empty fields; `None` if nothing is left.
pub fn parse_line(line: &str, delimiter: char) -> Option<RawTransaction> {
    let fields: RawTransaction = line
        .split(delimiter)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
        .collect();
    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}
