// picograd-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts one node from another.
///
/// Implemented as `a + (-b)`, inheriting the add and negate backward rules.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests; // Link to the test file
