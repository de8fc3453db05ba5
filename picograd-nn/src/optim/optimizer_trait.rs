/// Trait defining the common interface for all optimizers.
///
/// Optimizers own handles to the model's parameter nodes and update their
/// values from the gradients accumulated by the engine's backward pass.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads each parameter's accumulated gradient and applies the update
    /// rule to its value in place. Scalar updates cannot fail; gradients
    /// that went non-finite simply propagate into the values per IEEE
    /// semantics.
    fn step(&mut self);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call before the backward pass of each new training iteration;
    /// gradients otherwise accumulate across iterations.
    fn zero_grad(&mut self);
}
