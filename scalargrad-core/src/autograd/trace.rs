use crate::autograd::graph::topological_sort;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use std::collections::HashSet;

/// Snapshot of one node for external inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedNode {
    pub id: NodeId,
    pub value: f64,
    pub grad: f64,
    pub op: Op,
    pub label: Option<String>,
}

/// Nodes and provenance edges reachable from a root.
///
/// Nodes are listed in topological order (root last). Each edge is
/// `(operand, consumer)`; an operand used twice by the same consumer, as in
/// `a * a`, yields a single edge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace {
    pub nodes: Vec<TracedNode>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Trace {
    pub fn node(&self, id: NodeId) -> Option<&TracedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Walks the graph from `root` without modifying it.
pub fn trace(graph: &Graph, root: NodeId) -> Trace {
    let order = topological_sort(graph, root);
    let mut seen_edges = HashSet::new();
    let mut trace = Trace::default();

    for id in order {
        for operand in graph.provenance_of(id).operands() {
            if seen_edges.insert((operand, id)) {
                trace.edges.push((operand, id));
            }
        }
        trace.nodes.push(TracedNode {
            id,
            value: graph.value_of(id),
            grad: graph.grad_of(id),
            op: graph.op_of(id),
            label: graph.label_of(id),
        });
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_nodes_and_edges() {
        let graph = Graph::new();
        let x1 = graph.leaf_labeled(3.5, "x1");
        let x2 = graph.leaf_labeled(2.0, "x2");
        let prod = x1 * x2;
        let y = prod + x1;
        y.set_label("y");
        y.backward();

        let trace = y.trace();
        assert_eq!(trace.nodes.len(), 4);
        assert_eq!(
            trace.edges,
            vec![
                (x1.id(), prod.id()),
                (x2.id(), prod.id()),
                (prod.id(), y.id()),
                (x1.id(), y.id()),
            ]
        );

        let root = trace.node(y.id()).unwrap();
        assert_eq!(root.op, Op::Add);
        assert_eq!(root.value, 10.5);
        assert_eq!(root.grad, 1.0);
        assert_eq!(root.label.as_deref(), Some("y"));
        assert_eq!(trace.node(x2.id()).unwrap().grad, 3.5);
    }

    #[test]
    fn test_trace_dedups_repeated_operand() {
        let graph = Graph::new();
        let a = graph.leaf(2.0);
        let sq = a * a;
        let trace = sq.trace();
        assert_eq!(trace.edges, vec![(a.id(), sq.id())]);
        assert_eq!(trace.nodes.len(), 2);
    }

    #[test]
    fn test_trace_of_leaf() {
        let graph = Graph::new();
        let a = graph.leaf(1.0);
        let trace = a.trace();
        assert_eq!(trace.nodes.len(), 1);
        assert!(trace.edges.is_empty());
        assert_eq!(trace.nodes[0].op, Op::Leaf);
    }
}
