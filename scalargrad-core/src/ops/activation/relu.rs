use crate::node::Provenance;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Rectified linear unit: `max(0, a)`.
///
/// Backward: `da += (a > 0 ? 1 : 0) * g`. The gradient at exactly 0 is 0.
/// Like every other rule this adds into `a`'s accumulator, so a ReLU input
/// shared by several consumers keeps all of their contributions.
pub fn relu_op(a: Value<'_>) -> Value<'_> {
    apply_unary_op(a, a.value().max(0.0), Provenance::Relu(a.id()))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
