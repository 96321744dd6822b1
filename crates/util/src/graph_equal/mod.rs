//! Graph equality utilities.
//!
//! Provides deep structural equality over value graphs.

mod deep_equal;

pub use deep_equal::{
    deep_equal, deep_equal_with, try_deep_equal, try_deep_equal_with, EqualOptions,
    TemporalEquality,
};
