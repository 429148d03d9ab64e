//! # Scalar Operations Module (`ops`)
//!
//! Operation builders, grouped by kind. Each builder computes the forward value,
//! allocates exactly one node in the operands' [`Graph`] and records the
//! operator and operand ids the backward pass later dispatches on. Operands are
//! never mutated.
//!
//! - [`arithmetic`]: `add`, `mul`, `pow`, `neg`, `sub`, `div` and the `std::ops` overloads.
//! - [`math_elem`]: `tanh`, `exp`, `ln`.
//! - [`activation`]: `relu`.
//!
//! Composite operations (`neg`, `sub`, `div`) are built from the primitives and
//! so allocate more than one node.

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, Provenance};
use crate::value::Value;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Allocates the result of a single-operand operation in `a`'s graph.
pub(crate) fn apply_unary_op<'g>(a: Value<'g>, value: f64, provenance: Provenance) -> Value<'g> {
    let graph = a.graph();
    let id = graph.push(Node::new(value, provenance));
    Value::new(graph, id)
}

/// Returns the shared graph of `a` and `b`, or `ForeignNode` naming the stray operand.
pub(crate) fn shared_graph<'g>(
    a: Value<'g>,
    b: Value<'g>,
    operation: &str,
) -> Result<&'g Graph, ScalarGradError> {
    let graph = a.graph();
    if !graph.owns(&b) {
        return Err(ScalarGradError::ForeignNode {
            id: b.id(),
            operation: operation.to_string(),
        });
    }
    Ok(graph)
}

/// Allocates the result of a two-operand operation after checking both share a graph.
pub(crate) fn apply_binary_op<'g>(
    a: Value<'g>,
    b: Value<'g>,
    value: f64,
    provenance: Provenance,
    operation: &str,
) -> Result<Value<'g>, ScalarGradError> {
    let graph = shared_graph(a, b, operation)?;
    let id = graph.push(Node::new(value, provenance));
    Ok(Value::new(graph, id))
}
