use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::shared_graph;
use crate::value::Value;

/// Subtracts two nodes, built as `a + (-b)`.
///
/// # Errors
/// `ScalarGradError::ForeignNode` if `a` and `b` belong to different graphs.
/// The check runs before anything is allocated.
pub fn sub_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    shared_graph(a, b, "sub_op")?;
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
