//! Graph cloning utilities.
//!
//! Provides a deep clone that keeps the cycle and sharing topology of the
//! source graph.

mod clone;

pub use clone::clone;
