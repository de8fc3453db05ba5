// picograd-core/src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::value::Value;
use std::sync::Arc;

// --- ReluBackward Definition ---

/// Backward pass structure for the rectified linear unit.
///
/// The gate is evaluated on the stored input's value: the incoming gradient
/// passes through iff the input was strictly positive at forward time.
#[derive(Debug)]
struct ReluBackward {
    input: Value,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        let contribution = if self.input.item() > 0.0 {
            grad_output
        } else {
            0.0
        };
        Ok(vec![contribution])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- relu_op Implementation (Public API + Autograd Setup) ---

/// Computes the rectified linear unit `max(0, a)` of a node.
pub fn relu_op(a: &Value) -> Value {
    crate::ops::apply_unary_op(
        a,
        |x| x.max(0.0),
        |input, _| Arc::new(ReluBackward { input }),
        "relu",
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests; // Link to the test file
