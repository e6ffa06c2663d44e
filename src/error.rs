use thiserror::Error;

use crate::itemset::Itemset;

/// Everything that can go wrong while loading, mining or reporting.
#[derive(Debug, Error)]
pub enum AprioriError {
    /// A tunable parameter is out of range; raised before any mining starts.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Support is undefined over zero transactions.
    #[error("empty dataset: at least one transaction is required")]
    EmptyDataset,

    /// A frequent itemset's subset had no recorded support. Unreachable when
    /// candidates were pruned correctly, so this always points at a bug.
    #[error("internal consistency violation: no support recorded for itemset {itemset:?}")]
    MissingSupport { itemset: Itemset },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AprioriError>;
