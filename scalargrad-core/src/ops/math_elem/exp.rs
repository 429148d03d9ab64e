use crate::node::Provenance;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// `e` raised to a node.
///
/// Backward: `da += out * g`.
pub fn exp_op(a: Value<'_>) -> Value<'_> {
    apply_unary_op(a, a.value().exp(), Provenance::Exp(a.id()))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
