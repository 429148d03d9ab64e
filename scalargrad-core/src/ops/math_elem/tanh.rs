use crate::node::Provenance;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Hyperbolic tangent of a node.
///
/// Computed through the exponential as `(e^2x - 1) / (e^2x + 1)`. Past
/// `x ≈ 354.9` the exponential overflows and the quotient would be `inf / inf`,
/// so the result is pinned to 1 there.
///
/// Backward: `da += (1 - t^2) * g`, with `t` the output value.
pub fn tanh_op(a: Value<'_>) -> Value<'_> {
    apply_unary_op(a, tanh_via_exp(a.value()), Provenance::Tanh(a.id()))
}

fn tanh_via_exp(x: f64) -> f64 {
    let e2x = (2.0 * x).exp();
    if e2x.is_infinite() {
        return 1.0;
    }
    (e2x - 1.0) / (e2x + 1.0)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
