//! Given/when/then rule definitions over dynamically shaped input.
//!
//! A rule is assembled once with a typestate builder and then invoked any
//! number of times:
//!
//! ```
//! use gwt::{rule, string_field, Value};
//!
//! let vip = rule("vip customers get a discount", |r| {
//!     r.given(string_field("tier"))
//!         .expect(|tier| tier == "gold")
//!         .or(|tier| tier == "platinum")
//!         .then(|_| 0.2)
//!         .otherwise(|_| 0.0)
//! });
//!
//! let customer = Value::map().with("tier", "gold");
//! assert_eq!(vip.invoke(&customer), Ok(0.2));
//! ```
//!
//! Input fields are read through an [`AccessStrategy`]: flat maps and JSON
//! documents are built in. Keyed extractors that are not pinned with
//! [`using`] resolve the process-wide default (see [`use_map_default`] and
//! [`use_document_default`]) every time a rule runs.

mod access;
mod builder;
pub mod coerce;
mod evaluate;
pub mod extract;
mod types;

pub use access::{
    AccessStrategy, Fields, default_strategy, set_default, use_document_default,
    use_map_default, using,
};
pub use builder::{Entry, Given, Then, When};
pub use coerce::FromValue;
pub use extract::{
    any, any_array, any_bool, any_document, any_double, any_float, any_int, any_long, any_map,
    any_object, any_short, any_string, array_field, bool_field, document_field, double_field,
    field, float_field, int_field, long_field, map_field, path, short_field, string_field,
};
pub use types::{
    Evaluation, ObjectValue, Predicate, Rule, RuleDefinition, RuleError, RuleSet, Value, rule,
};
