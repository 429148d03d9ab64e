//! The node arena every [`Value`] points into.

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op, Provenance};
use crate::value::Value;
use std::cell::RefCell;
use std::fmt;

/// Arena owning every node of one computation graph.
///
/// Nodes are appended by leaf constructors and operation builders and are never
/// removed; the whole graph is released when the `Graph` is dropped. Operands
/// are always older than their consumer, so the provenance edges cannot form a
/// cycle.
///
/// Interior mutability lets many [`Value`] handles share `&Graph` while
/// builders append and backward passes write gradients. A `Graph` is not `Sync`;
/// construction and backward are single-threaded.
#[derive(Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates an unlabelled leaf (an input or a constant).
    pub fn leaf(&self, value: f64) -> Value<'_> {
        let id = self.push(Node::leaf(value, None));
        Value::new(self, id)
    }

    /// Creates a leaf carrying a human-readable label for debugging and traces.
    pub fn leaf_labeled(&self, value: f64, label: impl Into<String>) -> Value<'_> {
        let id = self.push(Node::leaf(value, Some(label.into())));
        Value::new(self, id)
    }

    /// Looks up a handle by id, e.g. one taken from a [`Trace`](crate::autograd::Trace).
    pub fn get(&self, id: NodeId) -> Result<Value<'_>, ScalarGradError> {
        let len = self.len();
        if id.0 >= len {
            return Err(ScalarGradError::UnknownNode { id, len });
        }
        Ok(Value::new(self, id))
    }

    /// Resets the gradient of every node in the arena to 0.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    // --- Crate-internal node access ---

    pub(crate) fn push(&self, node: Node) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        debug_assert!(
            node.provenance.operands().iter().all(|operand| operand.0 < id.0),
            "operands must be allocated before their consumer"
        );
        nodes.push(node);
        id
    }

    pub(crate) fn value_of(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.0].value
    }

    pub(crate) fn grad_of(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.0].grad
    }

    pub(crate) fn set_grad(&self, id: NodeId, grad: f64) {
        self.nodes.borrow_mut()[id.0].grad = grad;
    }

    /// Adds `delta` into the node's accumulator.
    pub(crate) fn accumulate_grad(&self, id: NodeId, delta: f64) {
        self.nodes.borrow_mut()[id.0].grad += delta;
    }

    pub(crate) fn provenance_of(&self, id: NodeId) -> Provenance {
        self.nodes.borrow()[id.0].provenance
    }

    pub(crate) fn op_of(&self, id: NodeId) -> Op {
        self.provenance_of(id).op()
    }

    pub(crate) fn label_of(&self, id: NodeId) -> Option<String> {
        self.nodes.borrow()[id.0].label.clone()
    }

    pub(crate) fn set_label(&self, id: NodeId, label: String) {
        self.nodes.borrow_mut()[id.0].label = Some(label);
    }

    /// True when `value` is a handle into this arena.
    pub(crate) fn owns(&self, value: &Value<'_>) -> bool {
        std::ptr::eq(self, value.graph())
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
