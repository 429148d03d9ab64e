use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, pow_op, sub_op};
use crate::value::Value;

/// Sum of squared errors `Σ (predᵢ - targetᵢ)²` as a single node.
///
/// Targets are constants and are wrapped as leaves of the predictions' graph.
///
/// # Errors
/// - `EmptyInput` if there are no predictions.
/// - `ShapeMismatch` if `predictions` and `targets` differ in length.
/// - `ForeignNode` if the predictions do not all share one graph.
pub fn mse_loss<'g>(
    predictions: &[Value<'g>],
    targets: &[f64],
) -> Result<Value<'g>, ScalarGradError> {
    let Some(first) = predictions.first() else {
        return Err(ScalarGradError::EmptyInput {
            operation: "mse_loss".to_string(),
        });
    };
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::ShapeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            operation: "mse_loss".to_string(),
        });
    }

    let squared_error = |pred: Value<'g>, target: f64| -> Result<Value<'g>, ScalarGradError> {
        let target = pred.graph().leaf(target);
        Ok(pow_op(sub_op(pred, target)?, 2.0))
    };

    let mut total = squared_error(*first, targets[0])?;
    for (&pred, &target) in predictions.iter().zip(targets).skip(1) {
        total = add_op(total, squared_error(pred, target)?)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_mse_loss_value_and_gradients() {
        let graph = Graph::new();
        let preds = [graph.leaf(0.5), graph.leaf(-0.25)];
        let loss = mse_loss(&preds, &[1.0, -1.0]).unwrap();
        assert_relative_eq!(loss.value(), 0.25 + 0.5625);

        loss.backward();
        assert_relative_eq!(preds[0].grad(), 2.0 * (0.5 - 1.0));
        assert_relative_eq!(preds[1].grad(), 2.0 * (-0.25 + 1.0));
    }

    #[test]
    fn test_mse_loss_length_mismatch() {
        let graph = Graph::new();
        let preds = [graph.leaf(0.5)];
        assert_eq!(
            mse_loss(&preds, &[1.0, 2.0]).unwrap_err(),
            ScalarGradError::ShapeMismatch {
                expected: 1,
                actual: 2,
                operation: "mse_loss".to_string()
            }
        );
    }

    #[test]
    fn test_mse_loss_empty() {
        assert!(matches!(
            mse_loss(&[], &[]),
            Err(ScalarGradError::EmptyInput { .. })
        ));
    }
}
