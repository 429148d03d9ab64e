use crate::error::ScalarGradError;
use crate::node::Provenance;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
///
/// # Errors
/// `ScalarGradError::ForeignNode` if `a` and `b` belong to different graphs.
pub fn add_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    apply_binary_op(
        a,
        b,
        a.value() + b.value(),
        Provenance::Add(a.id(), b.id()),
        "add_op",
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
