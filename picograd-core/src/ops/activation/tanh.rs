// picograd-core/src/ops/activation/tanh.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::value::Value;
use std::sync::Arc;

// --- TanhBackward Definition ---

/// Backward pass structure for the hyperbolic tangent.
///
/// The local derivative is `1 - tanh(x)^2`, expressed through the forward
/// result, which is captured as a plain `f64` (capturing the output node
/// would cycle the ownership graph).
#[derive(Debug)]
struct TanhBackward {
    input: Value,
    result: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![(1.0 - self.result * self.result) * grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- tanh_op Implementation (Public API + Autograd Setup) ---

/// Computes the hyperbolic tangent of a node as
/// `(e^(2x) - 1) / (e^(2x) + 1)`.
///
/// For finite inputs of moderate magnitude the result lies in (-1, 1) and
/// the local gradient factor `1 - out^2` lies in [0, 1]. Inputs large
/// enough to overflow `e^(2x)` follow IEEE semantics (`inf/inf = NaN`); the
/// engine does not clamp.
pub fn tanh_op(a: &Value) -> Value {
    crate::ops::apply_unary_op(
        a,
        |x| {
            let e2x = (2.0 * x).exp();
            (e2x - 1.0) / (e2x + 1.0)
        },
        |input, result| Arc::new(TanhBackward { input, result }),
        "tanh",
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests; // Link to the test file
