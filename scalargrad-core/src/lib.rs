//! # scalargrad-core
//!
//! A scalar-valued reverse-mode automatic differentiation engine.
//!
//! Nodes live in a [`Graph`] arena and are handled through copyable [`Value`]s.
//! Operations on values build new nodes that remember their operands; calling
//! [`Value::backward`] on a result fills in the gradient of every ancestor.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let x1 = graph.leaf_labeled(3.5, "x1");
//! let x2 = graph.leaf_labeled(2.0, "x2");
//! let y = x1 * x2 + x1;
//! y.backward();
//! assert_eq!(y.value(), 10.5);
//! assert_eq!(x1.grad(), 3.0);
//! assert_eq!(x2.grad(), 3.5);
//! ```
//!
//! The [`nn`] module builds neurons, layers and a multi-layer perceptron on top.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod node;
pub mod ops;
pub mod utils;
pub mod value;

pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{NodeId, Op};
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
pub use num_traits::Pow;
