use crate::error::PicoGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(PicoGradError),

    #[error("Engine error during intermediate calculation: {0}")]
    EngineError(PicoGradError),
}

// Map PicoGradError to GradCheckError::EngineError
impl From<PicoGradError> for GradCheckError {
    fn from(err: PicoGradError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must rebuild the scalar loss from scratch on every call (graphs
/// are never reused across calls); it receives `inputs` back and may also
/// capture them from its environment. Every entry of `inputs` must be a
/// leaf node, typically the trainable parameters of the expression under
/// test.
///
/// The analytical gradient of each input is obtained from one forward +
/// backward pass, then compared against
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` obtained by perturbing that
/// input's value in place and re-running the forward pass. An input passes
/// when the absolute difference is within `tolerance`, or when the
/// difference relative to the analytical magnitude is.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    // --- 1. Initial forward and backward pass (analytical gradients) ---
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs);
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    let analytical_grads: Vec<f64> = inputs.iter().map(Value::grad).collect();

    // --- 2. Per-input numerical gradient via central differences ---
    for (i, input) in inputs.iter().enumerate() {
        let analytical_grad = analytical_grads[i];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let original = input.item();

        input.set_item(original + epsilon);
        let loss_plus = func(inputs).item();

        input.set_item(original - epsilon);
        let loss_minus = func(inputs).item();

        // Restore before any early return below reports on a perturbed graph.
        input.set_item(original);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && (difference / (analytical_grad.abs() + epsilon)) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
