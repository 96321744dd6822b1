use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("NOT_AN_ARRAY")]
    NotAnArray,
    #[error("NOT_AN_OBJECT")]
    NotAnObject,
    #[error("index {index} is too far past the end of an array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The graph reaches `NodeId` again while rendering it.
    #[error("cycle detected at node {0}")]
    Cycle(NodeId),
    #[error("depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },
}
