use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::shared_graph;
use crate::value::Value;

/// Divides two nodes, built as `a * b^-1`.
///
/// A zero-valued divisor follows IEEE semantics: the result is infinite (or NaN
/// for `0 / 0`) and no error is raised.
///
/// # Errors
/// `ScalarGradError::ForeignNode` if `a` and `b` belong to different graphs.
pub fn div_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    shared_graph(a, b, "div_op")?;
    mul_op(a, pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
