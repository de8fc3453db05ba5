// picograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::value::Value;
use std::sync::Arc;

// --- Forward Operation ---

/// Raises a node to a fixed real exponent, `out = base ^ exponent`.
///
/// The exponent is a plain constant, not a node: only the base receives a
/// gradient (`d out / d base = exponent * base^(exponent - 1)`). Domain
/// edges (e.g. `0^-1`) surface as IEEE infinity/NaN in the value and the
/// gradient, never as an error.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    crate::ops::apply_unary_op(
        base,
        |x| x.powf(exponent),
        |base, _| Arc::new(PowBackward { base, exponent }),
        "pow",
    )
}

// --- Backward Operation ---

/// Backward pass structure for power-by-constant.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        let x = self.base.item();
        Ok(vec![self.exponent * x.powf(self.exponent - 1.0) * grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests; // Link to the test file
