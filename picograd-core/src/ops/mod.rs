//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the engine's differentiable operations, grouped by
//! category.
//!
//! ## Structure:
//!
//! - **`_op` functions:** each operation has a core function (`xxx_op`)
//!   performing the forward computation and fixing the backward rule of the
//!   output node. Forward functions are infallible: scalar arithmetic cannot
//!   fail, and numeric edge cases (division by a zero-valued node, `exp`
//!   overflow) propagate as IEEE infinity/NaN rather than raising.
//! - **`Backward` structs:** each primitive operation has a corresponding
//!   struct (e.g. `AddBackward`, `PowBackward`) implementing the
//!   [`BackwardOp`](crate::autograd::BackwardOp) trait and storing owning
//!   handles to its operands plus any operation-specific constant.
//! - **Composed operations** (`neg`, `sub`, `div`) are defined in terms of
//!   the primitives and inherit their backward rules; they register no
//!   backward struct of their own.
//!
//! ## Key submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow-by-constant.
//! - [`math_elem`]: element-wise math functions (exp).
//! - [`activation`]: tanh, relu.

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::sync::Arc;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Applies a unary operation to a node.
///
/// Handles the shared plumbing: forward evaluation, backward-rule
/// construction, and output node creation.
///
/// # Arguments
/// * `a`: the input node.
/// * `forward`: the scalar forward computation, `Fn(f64) -> f64`.
/// * `backward_builder`: builds the `BackwardOp` from the operand handle and
///   the already-computed forward result (ops like `exp`/`tanh` express
///   their local derivative through the output value; storing it as a plain
///   `f64` keeps the ownership graph acyclic).
/// * `op_name`: diagnostic tag for the output node.
pub(crate) fn apply_unary_op<F, B>(
    a: &Value,
    forward: F,
    backward_builder: B,
    op_name: &'static str,
) -> Value
where
    F: Fn(f64) -> f64,
    B: FnOnce(Value, f64) -> Arc<dyn BackwardOp + Send + Sync>,
{
    let result = forward(a.item());
    let grad_fn = backward_builder(a.clone(), result);
    Value::from_op(result, grad_fn, op_name)
}
