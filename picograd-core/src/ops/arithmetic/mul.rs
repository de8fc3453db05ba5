// picograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::value::Value;
use std::sync::Arc;

// --- Forward Operation ---

/// Multiplies two nodes, returning a new node `out = a * b`.
///
/// Each operand's gradient contribution is the *other* operand's value
/// times the incoming gradient.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let result = a.item() * b.item();
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(result, Arc::new(grad_fn), "*")
}

// --- Backward Operation ---

/// Backward pass structure for multiplication.
///
/// Stores owning handles to both operands: their forward values are needed
/// to evaluate the local derivatives. Node values are immutable after graph
/// construction (apart from explicit parameter updates between steps), so
/// reading them at backward time matches the values seen at forward time.
#[derive(Debug)]
struct MulBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![
            self.rhs.item() * grad_output,
            self.lhs.item() * grad_output,
        ])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests; // Link to the test file
