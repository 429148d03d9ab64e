use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    /// `log` applied to a value outside its domain (`value <= 0`).
    #[error("Domain error in {operation}: input {value} must be strictly positive")]
    LogDomain { operation: String, value: f64 },

    /// Operands of a single operation live in two different graphs.
    #[error("Node {id:?} used in {operation} belongs to a different graph")]
    ForeignNode { id: NodeId, operation: String },

    #[error("Node {id:?} does not exist in a graph of {len} nodes")]
    UnknownNode { id: NodeId, len: usize },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one input")]
    EmptyInput { operation: String },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),
}
