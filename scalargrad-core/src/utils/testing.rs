use crate::value::Value;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with both numbers otherwise.
pub fn check_value_near(actual: Value<'_>, expected: f64, tolerance: f64) {
    let diff = (actual.value() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            actual.value(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks the gradients of `nodes` against `expected`, element by element.
pub fn check_grads_near(nodes: &[Value<'_>], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Gradient count mismatch");
    for (i, (node, e)) in nodes.iter().zip(expected).enumerate() {
        let diff = (node.grad() - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                node.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}
