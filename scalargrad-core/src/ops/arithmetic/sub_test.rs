use super::*;
use crate::autograd::{check_grad, GradCheckConfig};
use crate::graph::Graph;
use crate::ScalarGradError;

#[test]
fn test_sub_forward() {
    let graph = Graph::new();
    let a = graph.leaf(3.5);
    let b = graph.leaf(2.0);
    assert_eq!(sub_op(a, b).unwrap().value(), 1.5);
    assert_eq!((a - 2.0).value(), 1.5);
}

#[test]
fn test_reversed_sub_with_constant() {
    let graph = Graph::new();
    let b = graph.leaf(2.0);
    let c = 3.5 - b;
    assert_eq!(c.value(), 1.5);
    c.backward();
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_backward() {
    let graph = Graph::new();
    let a = graph.leaf(3.5);
    let b = graph.leaf(2.0);
    let c = a - b;
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_grad_check() {
    let grads =
        check_grad(|_, x| sub_op(x[0], x[1]), &[3.5, 2.0], &GradCheckConfig::default()).unwrap();
    assert_eq!(grads, vec![1.0, -1.0]);
}

#[test]
fn test_sub_foreign_graph_allocates_nothing() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let a = g1.leaf(1.0);
    let b = g2.leaf(2.0);
    assert!(matches!(
        sub_op(a, b),
        Err(ScalarGradError::ForeignNode { .. })
    ));
    assert_eq!(g1.len(), 1);
    assert_eq!(g2.len(), 1);
}
