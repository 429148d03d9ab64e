use crate::autograd::backward_op::local_backward;
use crate::graph::Graph;
use crate::node::NodeId;
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first, post-order: a node is recorded only after all of its operands,
/// which are visited in construction order. The visited set is keyed by
/// [`NodeId`], so a node reachable along several paths appears exactly once.
/// The last element is always `root`.
///
/// Uses an explicit stack instead of recursion so long chains (e.g. sums over
/// many terms) cannot overflow the call stack. The resulting order is the same
/// as the recursive formulation.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, operands already pushed)
    let mut stack = vec![(root, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node) {
            continue;
        }
        log::trace!("[topological_sort] visiting {:?}", node);
        stack.push((node, true));
        // Reversed so the first operand is popped, and therefore finished, first.
        for operand in graph.provenance_of(node).operands().into_iter().rev() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }

    sorted_list
}

/// Runs a backward pass from `root`.
///
/// Sets `root`'s gradient to 1 (overwriting it), then applies each node's local
/// rule in reverse topological order. Gradients of all other nodes are
/// accumulated into; resetting them beforehand is the caller's job.
pub fn backward(graph: &Graph, root: NodeId) {
    graph.set_grad(root, 1.0);

    if graph.provenance_of(root).operands().is_empty() {
        log::debug!("backward() called on leaf {:?}. No operation to perform.", root);
        return;
    }

    let sorted_list = topological_sort(graph, root);
    log::debug!(
        "backward() from {:?} over {} nodes",
        root,
        sorted_list.len()
    );
    for &node in sorted_list.iter().rev() {
        local_backward(graph, node);
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
