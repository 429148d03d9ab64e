use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step and tolerance for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied on each side of an input (central differences).
    pub epsilon: f64,
    /// Accepted absolute or relative difference between the two gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-5,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and returns
/// the scalar output. The analytical gradient comes from one backward pass; the
/// numerical one from `(f(x + eps) - f(x - eps)) / 2eps`, each evaluation on
/// its own graph.
///
/// Returns the analytical gradients on success, in input order.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<Vec<f64>, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, ScalarGradError>,
{
    // --- Analytical pass ---
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    let evaluate = |perturbed: &[f64]| -> Result<f64, GradCheckError> {
        let graph = Graph::new();
        let leaves: Vec<Value<'_>> = perturbed.iter().map(|&x| graph.leaf(x)).collect();
        let output = func(&graph, &leaves)?;
        Ok(output.value())
    };

    // --- Numerical pass, one input at a time ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let mut plus = inputs.to_vec();
        plus[i] += config.epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= config.epsilon;

        let loss_plus = evaluate(&plus)?;
        let loss_minus = evaluate(&minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            log::warn!("check_grad: non-finite numerical gradient for input {}", i);
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            log::warn!("check_grad: non-finite analytical gradient for input {}", i);
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical)
}
