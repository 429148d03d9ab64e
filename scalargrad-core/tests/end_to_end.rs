use approx::assert_relative_eq;
use scalargrad_core::autograd::{check_grad, GradCheckConfig};
use scalargrad_core::utils::testing::{check_grads_near, check_value_near};
use scalargrad_core::{Graph, Op, Pow, ScalarGradError};

mod common;
use common::{reference_leaves, X1, X2};

#[test]
fn test_reference_scenario() {
    // y = x1*x2 + x1
    let graph = Graph::new();
    let (x1, x2) = reference_leaves(&graph);
    let y = x1 * x2 + x1;
    assert_eq!(y.value(), 10.5);

    y.backward();
    assert_eq!(y.grad(), 1.0);
    assert_eq!(x1.grad(), X2 + 1.0);
    assert_eq!(x2.grad(), X1);
    assert_eq!(x1.label().as_deref(), Some("x1"));
}

#[test]
fn test_binary_ops_with_nodes_and_constants() {
    let graph = Graph::new();
    let (x1, x2) = reference_leaves(&graph);
    let tol = 1e-6;

    check_value_near(x1 + x2, X1 + X2, tol);
    check_value_near(x1 - x2, X1 - X2, tol);
    check_value_near(x1 * x2, X1 * X2, tol);
    check_value_near(x1 / x2, X1 / X2, tol);

    check_value_near(x1 + X2, X1 + X2, tol);
    check_value_near(x1 - X2, X1 - X2, tol);
    check_value_near(x1 * X2, X1 * X2, tol);
    check_value_near(x1 / X2, X1 / X2, tol);
}

#[test]
fn test_reversed_binary_ops() {
    let graph = Graph::new();
    let (_, x2) = reference_leaves(&graph);
    let tol = 1e-6;
    check_value_near(X1 + x2, X1 + X2, tol);
    check_value_near(X1 - x2, X1 - X2, tol);
    check_value_near(X1 * x2, X1 * X2, tol);
    check_value_near(X1 / x2, X1 / X2, tol);
}

#[test]
fn test_unary_ops() {
    let graph = Graph::new();
    let (x1, _) = reference_leaves(&graph);
    let tol = 1e-6;
    check_value_near(-x1, -X1, tol);
    check_value_near(x1.pow(2.0), X1.powi(2), tol);
    check_value_near(x1.tanh(), X1.tanh(), tol);
    check_value_near(x1.exp(), X1.exp(), tol);
    check_value_near(x1.ln().unwrap(), X1.ln(), tol);
    check_value_near(x1.relu(), X1.max(0.0), tol);
}

#[test]
fn test_backward_per_operator_against_analytic_derivatives() {
    let graph = Graph::new();
    let (x1, x2) = reference_leaves(&graph);
    let tanh = X1.tanh();

    let cases = vec![
        (x1 + x2, [1.0, 1.0], "add"),
        (x1 - x2, [1.0, -1.0], "sub"),
        (x1 * x2, [X2, X1], "mul"),
        (x1 / x2, [1.0 / X2, -X1 / (X2 * X2)], "div"),
        (x1.pow(2.0), [2.0 * X1, 0.0], "pow"),
        (x1.tanh(), [1.0 - tanh * tanh, 0.0], "tanh"),
        (x1.exp(), [X1.exp(), 0.0], "exp"),
        (x1.ln().unwrap(), [1.0 / X1, 0.0], "log"),
        (x1.relu(), [1.0, 0.0], "relu"),
    ];

    for (result, expected, name) in cases {
        graph.zero_grad();
        result.backward();
        assert_relative_eq!(x1.grad(), expected[0], epsilon = 1e-6);
        assert_relative_eq!(x2.grad(), expected[1], epsilon = 1e-6);
        println!("{} backward ok", name);
    }
}

#[test]
fn test_every_operator_passes_finite_differences() {
    let config = GradCheckConfig::default();
    let inputs = [X1, X2];
    check_grad(|_, x| Ok(x[0] + x[1]), &inputs, &config).unwrap();
    check_grad(|_, x| Ok(x[0] - x[1]), &inputs, &config).unwrap();
    check_grad(|_, x| Ok(x[0] * x[1]), &inputs, &config).unwrap();
    check_grad(|_, x| Ok(x[0] / x[1]), &inputs, &config).unwrap();
    check_grad(|_, x| Ok(x[0].pow(3.0) * x[1]), &inputs, &config).unwrap();
    check_grad(|_, x| Ok((x[0] * x[1]).tanh()), &[0.3, -0.7], &config).unwrap();
    check_grad(|_, x| Ok((x[0] - x[1]).exp()), &inputs, &config).unwrap();
    check_grad(|_, x| (x[0] * x[1]).ln(), &inputs, &config).unwrap();
    check_grad(|_, x| Ok((x[0] - x[1]).relu() * x[1]), &inputs, &config).unwrap();
}

#[test]
fn test_composite_expression_gradients() {
    // f(a, b) = ln(exp(a*b) + b^2) / (1 + tanh(a))
    let config = GradCheckConfig::default();
    let grads = check_grad(
        |_, x| {
            let numerator = ((x[0] * x[1]).exp() + x[1].pow(2.0)).ln()?;
            Ok(numerator / (1.0 + x[0].tanh()))
        },
        &[0.4, -1.2],
        &config,
    )
    .unwrap();
    assert_eq!(grads.len(), 2);
}

#[test]
fn test_log_domain_error_surfaces_at_call_site() {
    let graph = Graph::new();
    let (x1, _) = reference_leaves(&graph);
    let shifted = x1 - 10.0;
    let before = graph.len();
    let err = shifted.ln().unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::LogDomain {
            operation: "ln_op".to_string(),
            value: X1 - 10.0
        }
    );
    assert_eq!(graph.len(), before);
}

#[test]
fn test_leaf_backward() {
    let graph = Graph::new();
    let (x1, x2) = reference_leaves(&graph);
    x1.backward();
    check_grads_near(&[x1, x2], &[1.0, 0.0], 0.0);
    assert_eq!(x1.op(), Op::Leaf);
}
