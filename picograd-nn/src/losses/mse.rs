// src/losses/mse.rs

use picograd_core::Value;

/// How the per-example squared errors are combined into one loss node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Plain sum of squared errors.
    Sum,
    /// Sum divided by the number of examples.
    Mean,
}

/// Mean squared error between predicted nodes and plain-number targets.
///
/// Targets are coerced into zero-gradient leaves by the mixed-operand
/// subtraction, so the loss node closes over the predictions' whole graphs
/// and `loss.backward()` reaches every parameter behind them.
#[derive(Debug)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Builds the loss node `reduce((y_pred_i - y_i)^2)`.
    ///
    /// Panics if the two slices differ in length.
    pub fn forward(&self, predictions: &[Value], targets: &[f64]) -> Value {
        assert_eq!(
            predictions.len(),
            targets.len(),
            "MseLoss: {} predictions vs {} targets",
            predictions.len(),
            targets.len()
        );
        let total = predictions
            .iter()
            .zip(targets)
            .map(|(prediction, &target)| (prediction - target).powf(2.0))
            .sum::<Value>();
        match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests; // Link to the test file
