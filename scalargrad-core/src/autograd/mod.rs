//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! [`graph::topological_sort`] linearises everything reachable from a root so that
//! operands precede consumers; [`graph::backward`] seeds the root with gradient 1
//! and replays the per-operator rules of [`backward_op`] in reverse order. Every
//! consumer of a node has therefore pushed its contribution before the node
//! propagates its own gradient further.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod trace;

pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use trace::{Trace, TracedNode};
