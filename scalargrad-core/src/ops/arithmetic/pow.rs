use crate::node::Provenance;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Raises a node to a constant real power: `a^k`.
///
/// The exponent is a plain `f64`, never a node, so differentiating with respect
/// to the exponent is not possible by construction.
///
/// Backward: `da += k * a^(k-1) * g`. This form stays finite at `a == 0` for
/// `k >= 1`, unlike `k * out / a`.
pub fn pow_op(a: Value<'_>, k: f64) -> Value<'_> {
    apply_unary_op(a, a.value().powf(k), Provenance::Pow(a.id(), k))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
