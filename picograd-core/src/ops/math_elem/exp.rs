// picograd-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::value::Value;
use std::sync::Arc;

// --- ExpBackward Definition ---

/// Backward pass structure for the natural exponential.
///
/// The local derivative of `e^x` is the output value itself, so the forward
/// result is captured here as a plain `f64`. Storing the output *node*
/// instead would make the output own itself through its `grad_fn` and leak
/// the whole subgraph.
#[derive(Debug)]
struct ExpBackward {
    input: Value,
    result: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![self.result * grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- exp_op Implementation (Public API + Autograd Setup) ---

/// Computes the natural exponential `e^a` of a node.
///
/// Overflow for large inputs produces IEEE infinity in the value and the
/// downstream gradients; no error is raised.
pub fn exp_op(a: &Value) -> Value {
    crate::ops::apply_unary_op(
        a,
        f64::exp,
        |input, result| Arc::new(ExpBackward { input, result }),
        "exp",
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests; // Link to the test file
