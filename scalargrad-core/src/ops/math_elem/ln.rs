use crate::error::ScalarGradError;
use crate::node::Provenance;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Natural logarithm of a node.
///
/// Backward: `da += g / a`.
///
/// # Errors
/// `ScalarGradError::LogDomain` when `a <= 0` (or NaN). No node is allocated in
/// that case.
pub fn ln_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    let x = a.value();
    // Written so that NaN also fails.
    if !(x > 0.0) {
        return Err(ScalarGradError::LogDomain {
            operation: "ln_op".to_string(),
            value: x,
        });
    }
    Ok(apply_unary_op(a, x.ln(), Provenance::Log(a.id())))
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
