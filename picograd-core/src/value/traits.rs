// src/value/traits.rs

use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

impl Clone for Value {
    /// Clones the handle. This is a shallow clone that increases the
    /// reference count of the shared node state; gradient accumulation
    /// through one clone is visible through all others.
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .finish()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}

impl PartialEq for Value {
    /// Two handles are equal when they are the same node, or when their
    /// scalar values compare equal (IEEE semantics, so NaN != NaN).
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        self.item() == other.item()
    }
}

// --- Coercions: plain numbers become zero-gradient leaf nodes ---

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}
