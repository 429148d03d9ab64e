use scalargrad_core::{Graph, Value};

/// Reference inputs shared by the integration tests.
#[allow(dead_code)]
pub const X1: f64 = 3.5;
#[allow(dead_code)]
pub const X2: f64 = 2.0;

/// Creates the two labelled reference leaves `x1` and `x2`.
#[allow(dead_code)]
pub fn reference_leaves(graph: &Graph) -> (Value<'_>, Value<'_>) {
    (graph.leaf_labeled(X1, "x1"), graph.leaf_labeled(X2, "x2"))
}

/// Gradients of every node reachable from `root`, in topological order.
#[allow(dead_code)]
pub fn reachable_grads(root: Value<'_>) -> Vec<f64> {
    root.topological_order().iter().map(|v| v.grad()).collect()
}
