//! # Training a small MLP with scalargrad
//!
//! Fits a 3-4-4-1 tanh network to four hand-written samples:
//! 1. bind the model to a fresh `Graph` every step,
//! 2. build predictions and the squared-error loss,
//! 3. `backward()` from the loss,
//! 4. apply a plain SGD update to the owned parameters.
//!
//! Run with `cargo run --example train_mlp`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{mse_loss, sgd_step, BoundModule, Mlp, Module};
use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let mut mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    println!("Model has {} parameters", mlp.num_parameters());

    let learning_rate = 0.05;
    for epoch in 0..100 {
        let graph = Graph::new();
        let model = mlp.bind(&graph);

        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            let inputs: Vec<_> = x.iter().map(|&v| graph.leaf(v)).collect();
            preds.extend(model.forward(&inputs)?);
        }
        let loss = mse_loss(&preds, &ys)?;

        model.zero_grad();
        loss.backward();
        sgd_step(&mut mlp, &model, learning_rate)?;

        if epoch % 10 == 0 {
            println!("epoch {:>3}: loss = {:.6} ({} nodes)", epoch, loss.value(), graph.len());
        }
    }

    let graph = Graph::new();
    let model = mlp.bind(&graph);
    for (x, y) in xs.iter().zip(ys.iter()) {
        let inputs: Vec<_> = x.iter().map(|&v| graph.leaf(v)).collect();
        let pred = model.forward(&inputs)?;
        println!("{:?} -> {:+.4} (target {:+})", x, pred[0].value(), y);
    }
    Ok(())
}
