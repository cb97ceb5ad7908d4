mod definition;
mod error;
mod evaluation;
mod predicate;
mod rule;
mod ruleset;
mod value;

pub(crate) use definition::{ExtractFn, ProduceFn};
pub use definition::RuleDefinition;
pub use error::RuleError;
pub use evaluation::Evaluation;
pub use predicate::Predicate;
pub use rule::{Rule, rule};
pub use ruleset::RuleSet;
pub use value::{ObjectValue, Value};
