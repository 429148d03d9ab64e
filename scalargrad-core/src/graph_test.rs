use super::*;

#[test]
fn test_leaf_allocation() {
    let graph = Graph::new();
    assert!(graph.is_empty());

    let a = graph.leaf(1.5);
    let b = graph.leaf_labeled(-2.0, "b");
    assert_eq!(graph.len(), 2);
    assert_eq!(a.value(), 1.5);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(a.label(), None);
    assert_eq!(b.label().as_deref(), Some("b"));
    assert_eq!(b.op(), Op::Leaf);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_get_by_id() {
    let graph = Graph::with_capacity(4);
    let a = graph.leaf(3.0);
    let found = graph.get(a.id()).unwrap();
    assert_eq!(found, a);

    let missing = NodeId(7);
    assert_eq!(
        graph.get(missing).unwrap_err(),
        ScalarGradError::UnknownNode { id: missing, len: 1 }
    );
}

#[test]
fn test_zero_grad_resets_every_node() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(5.0);
    let c = a * b;
    c.backward();
    assert_eq!(a.grad(), 5.0);
    assert_eq!(c.grad(), 1.0);

    graph.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(c.grad(), 0.0);
}

#[test]
fn test_owns_distinguishes_graphs() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let a = g1.leaf(1.0);
    assert!(g1.owns(&a));
    assert!(!g2.owns(&a));
}
