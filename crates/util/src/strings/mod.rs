//! String utilities.
//!
//! Case conversion, truncation and reversal. All functions work on `char`s,
//! not bytes, so multi-byte text is never split.

mod case;
mod util;

pub use case::{camel_case, capitalize, kebab_case};
pub use util::{reverse, truncate};
