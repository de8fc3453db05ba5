// src/value_data.rs

use crate::autograd::BackwardOp;
use std::sync::Arc;

/// Internal storage and metadata for a scalar node.
///
/// Holds the forward value, the gradient accumulator, and the autograd
/// link back to the operation that produced the node. It is wrapped in
/// `Arc<RwLock<ValueData>>` by the [`Value`](crate::value::Value) handle
/// so that an operand can be shared by arbitrarily many downstream
/// consumers while keeping a single mutable `grad` per logical node.
#[derive(Debug)]
pub struct ValueData {
    /// The node's scalar result, fixed at construction (except for explicit
    /// parameter updates between training steps).
    pub(crate) data: f64,
    /// Accumulator for d(root)/d(this). Zero until a `backward()` call from
    /// a root that reaches this node; contributions are always *added*,
    /// never overwritten, because a node may feed several consumers.
    pub(crate) grad: f64,
    /// The backward rule of the operation that produced this node.
    /// Leaf nodes (literals, parameters) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>,
    /// Diagnostic tag naming the producing operation ("+", "*", "tanh", ...).
    /// Not load-bearing for correctness.
    pub(crate) op: Option<&'static str>,
}

impl ValueData {
    /// Creates the state for a leaf node with a zeroed gradient accumulator.
    pub(crate) fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: None,
            op: None,
        }
    }

    /// Creates the state for an operation output, fixing its backward rule
    /// and diagnostic tag at construction time.
    pub(crate) fn from_op(
        data: f64,
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
        op: &'static str,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            op: Some(op),
        }
    }

    /// A node is a leaf when no operation produced it.
    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}
