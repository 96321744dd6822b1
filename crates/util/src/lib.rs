//! objkit-util - operations over objkit value graphs, plus small helpers.
//!
//! The graph operations (`clone`, `merge`, `deep_equal`, `omit`, `pick`) take
//! the [`Graph`](objkit_value::Graph) that owns their inputs and never mutate
//! those inputs. The remaining modules are independent helpers over plain
//! Rust values.

pub mod arrays;
mod error;
pub mod graph_clone;
pub mod graph_equal;
pub mod graph_merge;
pub mod has_own_property;
pub mod is_empty;
pub mod numbers;
pub mod pick;
pub mod random;
pub mod strings;
pub mod validation;

// Re-exports for convenience
pub use arrays::{
    chunk, compact, compact_node, difference, flatten, group_by, intersection, uniq, Truthy,
};
pub use error::UtilError;
pub use graph_clone::clone;
pub use graph_equal::{
    deep_equal, deep_equal_with, try_deep_equal, try_deep_equal_with, EqualOptions,
    TemporalEquality,
};
pub use graph_merge::merge;
pub use has_own_property::has_own_property;
pub use is_empty::{is_empty_node, is_empty_value};
pub use numbers::{average, clamp, random, sum};
pub use pick::{omit, pick};
pub use random::Random;
pub use strings::{camel_case, capitalize, kebab_case, reverse, truncate};
pub use validation::{is_date, is_date_node, is_email, is_uuid, DateInput};
