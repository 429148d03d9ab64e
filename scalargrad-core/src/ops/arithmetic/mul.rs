use crate::error::ScalarGradError;
use crate::node::Provenance;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `da += b * g`, `db += a * g`. Squaring a node (`mul_op(a, a)`)
/// records `a` twice and so accumulates `2a * g`.
///
/// # Errors
/// `ScalarGradError::ForeignNode` if `a` and `b` belong to different graphs.
pub fn mul_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    apply_binary_op(
        a,
        b,
        a.value() * b.value(),
        Provenance::Mul(a.id(), b.id()),
        "mul_op",
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
