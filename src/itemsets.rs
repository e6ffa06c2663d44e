//! Frequent-itemset mining: candidate generation, support counting and the
//! level-wise driver that alternates the two.

pub mod candidates;
pub mod count;
pub mod levels;
pub mod tidsets;

pub use candidates::{create_c1, create_ck};
pub use count::{generate_lk, CountSupport};
pub use levels::generate_frequent_itemsets;
pub use tidsets::TidSets;
