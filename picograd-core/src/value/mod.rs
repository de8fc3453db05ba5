// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock};

mod autograd_methods;
mod operators;
mod traits;

/// A scalar node in a dynamically constructed computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared ownership:** the same node is legitimately an operand of
///     arbitrarily many downstream nodes (a weight feeds every training
///     example), so clones are cheap handle copies, never data copies.
/// 2.  **Interior mutability:** the gradient accumulator within `ValueData`
///     is mutated through immutable handles during the backward pass.
///
/// Building an expression out of `Value` operations *is* the forward pass:
/// each operation eagerly computes its result and fixes the backward rule of
/// the output node at construction time.
pub struct Value {
    /// Arc for shared ownership, RwLock for interior mutability of ValueData.
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with a zeroed gradient and no
    /// producing operation.
    pub fn new(data: f64) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::new(data))),
        }
    }

    /// Creates an operation output node. Value, operands (inside `grad_fn`)
    /// and backward rule are fixed atomically here.
    pub(crate) fn from_op(
        data: f64,
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
        op: &'static str,
    ) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::from_op(data, grad_fn, op))),
        }
    }

    /// Returns the node's scalar value.
    pub fn item(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the node's scalar value in place.
    ///
    /// Intended for the training-step parameter update
    /// (`value -= learning_rate * gradient`) on leaf nodes between backward
    /// passes; graph links and the gradient accumulator are untouched.
    pub fn set_item(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the diagnostic tag of the operation that produced this node,
    /// or `None` for leaves.
    pub fn op(&self) -> Option<&'static str> {
        self.read_data().op
    }

    /// A node is a leaf when no operation produced it (literal or parameter).
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Stable identity of this node, independent of handle clones.
    pub fn id_ptr(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Acquires a read lock on the node's state.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's state.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }

    // --- Math methods (delegating to the ops modules) ---

    /// Raises this node to a fixed real exponent. See
    /// [`pow_op`](crate::ops::arithmetic::pow_op).
    pub fn powf(&self, exponent: f64) -> Value {
        crate::ops::arithmetic::pow_op(self, exponent)
    }

    /// Natural exponential. See [`exp_op`](crate::ops::math_elem::exp_op).
    pub fn exp(&self) -> Value {
        crate::ops::math_elem::exp_op(self)
    }

    /// Hyperbolic tangent. See [`tanh_op`](crate::ops::activation::tanh_op).
    pub fn tanh(&self) -> Value {
        crate::ops::activation::tanh_op(self)
    }

    /// Rectified linear unit. See [`relu_op`](crate::ops::activation::relu_op).
    pub fn relu(&self) -> Value {
        crate::ops::activation::relu_op(self)
    }
}
