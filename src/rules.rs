pub mod rule;
pub mod search;

pub use rule::{NamedRule, Rule};
pub use search::generate_rules;
