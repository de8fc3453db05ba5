//! # Training a Small MLP
//!
//! Demonstrates the full training loop on the four-sample regression task:
//!
//! 1. Build a 3-4-4-1 tanh MLP with uniform [-1, 1] parameters.
//! 2. Forward every example through the network (graph construction *is*
//!    the forward pass).
//! 3. Combine the per-example squared errors into one loss node.
//! 4. `zero_grad`, then `loss.backward()` to accumulate exact gradients
//!    into every weight and bias.
//! 5. Take one SGD step and print the loss.
//!
//! ## Running
//! `cargo run --example train_mlp`

use picograd_core::{PicoGradError, Value};
use picograd_nn::{Mlp, Module, MseLoss, Optimizer, Reduction, Sgd};

fn main() -> Result<(), PicoGradError> {
    let xs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0]; // desired targets

    let mlp = Mlp::new(3, &[4, 4, 1]);
    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(mlp.parameters(), 0.05);

    println!(
        "training a {}-input MLP with {} parameters",
        mlp.input_width(),
        mlp.parameters().len()
    );

    for epoch in 0..20 {
        // --- Forward pass over every example ---
        let predictions: Vec<Value> = xs
            .iter()
            .map(|example| {
                let inputs: Vec<Value> = example.iter().map(|&x| Value::new(x)).collect();
                mlp.forward(&inputs).remove(0)
            })
            .collect();

        // --- Loss ---
        let loss = loss_fn.forward(&predictions, &ys);

        // --- Backward pass ---
        optimizer.zero_grad();
        loss.backward()?;

        // --- Update ---
        optimizer.step();

        println!("epoch {:2}  loss {:.6}", epoch, loss.item());
    }

    Ok(())
}
