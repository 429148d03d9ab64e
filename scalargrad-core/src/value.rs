//! `Value`: the public handle to a scalar node.

use crate::autograd::graph::{backward, topological_sort};
use crate::autograd::trace::{trace, Trace};
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Handle to one scalar node of a [`Graph`].
///
/// A `Value` is a `Copy` pair of arena reference and [`NodeId`]; copying it never
/// copies the node. Equality and hashing are by identity, so `graph.leaf(1.0)`
/// twice yields two unequal values. Compare [`Value::value`] to compare numbers.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The arena this node lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forward value computed when the node was built.
    pub fn value(&self) -> f64 {
        self.graph.value_of(self.id)
    }

    /// Accumulated gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.graph.grad_of(self.id)
    }

    pub fn op(&self) -> Op {
        self.graph.op_of(self.id)
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.label_of(self.id)
    }

    /// Attaches a debugging label. Labels never affect values or gradients.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.set_label(self.id, label.into());
    }

    /// The nodes this one was computed from, in construction order.
    pub fn operands(&self) -> Vec<Value<'g>> {
        self.graph
            .provenance_of(self.id)
            .operands()
            .into_iter()
            .map(|id| Value::new(self.graph, id))
            .collect()
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.graph.set_grad(self.id, 0.0);
    }

    /// Seeds this node with gradient 1 and propagates to every ancestor.
    ///
    /// Gradients of the other nodes are accumulated into, not overwritten: call
    /// [`Graph::zero_grad`] (or [`Value::zero_grad`] on the nodes you care about)
    /// before an independent pass.
    pub fn backward(&self) {
        backward(self.graph, self.id);
    }

    /// Every node reachable from this one, operands before consumers, ending with `self`.
    pub fn topological_order(&self) -> Vec<Value<'g>> {
        topological_sort(self.graph, self.id)
            .into_iter()
            .map(|id| Value::new(self.graph, id))
            .collect()
    }

    /// Read-only export of the nodes and provenance edges reachable from this node.
    pub fn trace(&self) -> Trace {
        trace(self.graph, self.id)
    }

    // --- Operator methods ---

    /// Hyperbolic tangent, see [`tanh_op`](crate::ops::math_elem::tanh_op).
    pub fn tanh(self) -> Value<'g> {
        crate::ops::math_elem::tanh_op(self)
    }

    /// `e^self`, see [`exp_op`](crate::ops::math_elem::exp_op).
    pub fn exp(self) -> Value<'g> {
        crate::ops::math_elem::exp_op(self)
    }

    /// Natural logarithm. Fails for non-positive values without allocating a node.
    #[doc(alias = "log")]
    pub fn ln(self) -> Result<Value<'g>, ScalarGradError> {
        crate::ops::math_elem::ln_op(self)
    }

    /// `max(0, self)`, see [`relu_op`](crate::ops::activation::relu_op).
    pub fn relu(self) -> Value<'g> {
        crate::ops::activation::relu_op(self)
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for Value<'_> {}

impl Hash for Value<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.graph as *const Graph).hash(state);
        self.id.hash(state);
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.value())
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op())
            .field("label", &self.label())
            .finish()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
