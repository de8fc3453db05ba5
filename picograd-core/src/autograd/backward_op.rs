use crate::error::PicoGradError;
use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar
/// operation.
///
/// Any operation that creates a non-leaf [`Value`] has an associated
/// `BackwardOp` implementation. It is stored in the output node's `grad_fn`
/// field at construction time and invoked during `backward()` to propagate
/// gradients according to the chain rule. The rule is fixed once the output
/// node exists; the graph is immutable afterwards except for gradient
/// accumulation.
///
/// The trait requires `Debug + Send + Sync` because the `Arc<dyn BackwardOp>`
/// holding the state is shared between the output node and any code
/// inspecting the graph.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the local chain-rule contributions for this operation's
    /// operands, given the gradient flowing into the operation's output.
    ///
    /// The driver guarantees `grad_output` is already *fully accumulated*
    /// from every downstream consumer of the output node before this method
    /// runs; the returned values are then added into the operands'
    /// gradient accumulators.
    ///
    /// # Returns
    /// One contribution per operand. The order **must** strictly match the
    /// order of the handles returned by [`inputs`](Self::inputs); the driver
    /// zips the two and treats a length mismatch as an
    /// [`ArityMismatch`](PicoGradError::ArityMismatch).
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError>;

    /// Returns owning handles to the operand nodes of the forward operation.
    ///
    /// Storing `Value` handles (rather than weak references) is what keeps
    /// every ancestor of a live root alive: the root owns its `grad_fn`,
    /// which owns its operands, transitively. Backward structs must never
    /// store the *output* node, which would make the ownership graph cyclic.
    fn inputs(&self) -> Vec<Value>;
}
