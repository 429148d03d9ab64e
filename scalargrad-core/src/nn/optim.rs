use crate::error::ScalarGradError;
use crate::nn::module::{BoundModule, Module};

/// One plain gradient-descent update: `p -= learning_rate * p.grad` for every
/// parameter of `module`, reading gradients from the matching leaves of `bound`.
///
/// `bound` must come from `module.bind(..)` so the two parameter lists line up.
///
/// # Errors
/// `ShapeMismatch` if the parameter counts differ; nothing is updated then.
pub fn sgd_step<'g, M, B>(
    module: &mut M,
    bound: &B,
    learning_rate: f64,
) -> Result<(), ScalarGradError>
where
    M: Module,
    B: BoundModule<'g>,
{
    let leaves = bound.parameters();
    let mut params = module.parameters_mut();
    if params.len() != leaves.len() {
        return Err(ScalarGradError::ShapeMismatch {
            expected: params.len(),
            actual: leaves.len(),
            operation: "sgd_step".to_string(),
        });
    }
    for (param, leaf) in params.iter_mut().zip(&leaves) {
        **param -= learning_rate * leaf.grad();
    }
    Ok(())
}
