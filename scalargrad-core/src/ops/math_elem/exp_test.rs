use super::*;
use crate::autograd::{check_grad, GradCheckConfig};
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let graph = Graph::new();
    let a = graph.leaf(3.5);
    assert_relative_eq!(exp_op(a).value(), 3.5_f64.exp());
    assert_relative_eq!(graph.leaf(0.0).exp().value(), 1.0);
}

#[test]
fn test_exp_backward() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = a.exp();
    b.backward();
    assert_relative_eq!(a.grad(), std::f64::consts::E);
}

#[test]
fn test_exp_grad_check() {
    check_grad(|_, x| Ok(exp_op(x[0])), &[3.5], &GradCheckConfig::default()).unwrap();
}
