// picograd-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides one node by another.
///
/// Implemented as `a * b^(-1)`, inheriting the multiply and power backward
/// rules. Division by a zero-valued node yields IEEE infinity/NaN in the
/// value and gradients, not an error.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests; // Link to the test file
