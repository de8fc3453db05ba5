// picograd-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::value::Value;
use std::sync::Arc;

// --- Forward Operation ---

/// Adds two nodes, returning a new node `out = a + b`.
///
/// The output's backward rule routes the incoming gradient unchanged to both
/// operands (`d out / d a = d out / d b = 1`). Passing the same node for
/// both operands is legal and accumulates twice.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let result = a.item() + b.item();
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Value::from_op(result, Arc::new(grad_fn), "+")
}

// --- Backward Operation ---

/// Backward pass structure for addition.
#[derive(Debug)]
struct AddBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![grad_output, grad_output])
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests; // Link to the test file
