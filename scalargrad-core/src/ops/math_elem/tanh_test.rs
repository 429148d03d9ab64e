use super::*;
use crate::autograd::{check_grad, GradCheckConfig};
use crate::graph::Graph;
use crate::node::Op;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_tanh_forward_matches_std() {
    let graph = Graph::new();
    for &x in &[-3.0, -0.5, 0.0, 0.8813735870195432, 3.5] {
        let t = tanh_op(graph.leaf(x));
        assert_abs_diff_eq!(t.value(), f64::tanh(x), epsilon = 1e-12);
        assert_eq!(t.op(), Op::Tanh);
    }
}

#[test]
fn test_tanh_saturates_without_nan() {
    let graph = Graph::new();
    assert_eq!(tanh_op(graph.leaf(1000.0)).value(), 1.0);
    assert_eq!(tanh_op(graph.leaf(-1000.0)).value(), -1.0);
}

#[test]
fn test_tanh_backward() {
    let graph = Graph::new();
    let a = graph.leaf(0.8813735870195432);
    let t = a.tanh();
    t.backward();
    // tanh(0.88137...) = 0.7071..., 1 - t^2 = 0.5
    assert_relative_eq!(a.grad(), 0.5, max_relative = 1e-9);
}

#[test]
fn test_tanh_grad_check() {
    check_grad(|_, x| Ok(tanh_op(x[0])), &[3.5], &GradCheckConfig::default()).unwrap();
    check_grad(|_, x| Ok(tanh_op(x[0])), &[-0.3], &GradCheckConfig::default()).unwrap();
}
