use picograd_core::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// A module owns trainable leaf nodes and composes engine operations to map
/// input nodes to output nodes. Evaluation is the forward pass: the graph
/// for one prediction is built eagerly while `forward` executes and is
/// discarded with the returned handles.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: the input nodes, one per input feature.
    ///
    /// # Returns
    /// The module's output nodes. Single-output modules return a one-element
    /// vector.
    fn forward(&self, inputs: &[Value]) -> Vec<Value>;

    /// Returns all trainable parameters of the module as a flat sequence.
    ///
    /// The ordering is part of the contract: training code zips it against
    /// parallel gradient-reset and update passes, so implementations must
    /// concatenate sub-module parameters in a stable, documented order.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient accumulator of every parameter to zero.
    ///
    /// Must be called before each new `backward()` that reuses the same
    /// parameter nodes; the engine never auto-resets.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock module for exercising the provided methods.
    #[derive(Debug)]
    struct MockModule {
        param: Value,
    }

    impl Module for MockModule {
        fn forward(&self, inputs: &[Value]) -> Vec<Value> {
            inputs.iter().map(|x| x * &self.param).collect()
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.param.clone()]
        }
    }

    #[test]
    fn test_zero_grad_resets_parameters() {
        let module = MockModule {
            param: Value::new(2.0),
        };
        let inputs = vec![Value::new(3.0)];
        let outputs = module.forward(&inputs);
        outputs[0].backward().unwrap();
        assert_eq!(module.parameters()[0].grad(), 3.0);

        module.zero_grad();
        assert_eq!(module.parameters()[0].grad(), 0.0);
    }

    #[test]
    fn test_parameters_share_the_underlying_node() {
        let module = MockModule {
            param: Value::new(2.0),
        };
        // parameters() hands out clones of the same logical node.
        let p = module.parameters()[0].clone();
        p.set_item(5.0);
        assert_eq!(module.param.item(), 5.0);
    }
}
