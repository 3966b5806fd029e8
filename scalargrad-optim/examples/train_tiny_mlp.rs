//! Trains a 3-4-4-1 tanh MLP on a four-sample toy dataset with plain SGD.
//!
//! Run with `RUST_LOG=info cargo run -p scalargrad-optim --example train_tiny_mlp`.
//! The loss graph of the last epoch is written to `mlp_graph.dot` (and rendered to
//! `mlp_graph.png` when Graphviz is installed).

use scalargrad_core::nn::{InitConfig, Initializer, MSELoss, Mlp, Module};
use scalargrad_core::{BackwardOptions, Graph, ScalarGradError, Var};
use scalargrad_optim::{GradStats, Optimizer, Sgd, SgdConfig};

const EPOCHS: usize = 20;
const LEARNING_RATE: f64 = 0.15;
const SEED: u64 = 1337;

/// Output of the single-unit network for one sample.
fn predict<'g>(graph: &'g Graph, model: &Mlp<'g>, x: &[f64; 3]) -> Result<Var<'g>, ScalarGradError> {
    let inputs: Vec<Var<'g>> = x.iter().map(|&v| graph.constant(v)).collect();
    let output = model.forward(&inputs)?;
    output.into_iter().next().ok_or_else(|| ScalarGradError::EmptyInput {
        operation: "Mlp::forward".to_string(),
    })
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let xs = [[2.0, 3.0, -1.0], [3.0, -1.0, 0.5], [0.5, 1.0, 1.0], [1.0, 1.0, -1.0]];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mut init = Initializer::new(&InitConfig::seeded(SEED))?;
    let model = Mlp::new(&graph, 3, &[4, 4, 1], &mut init);
    log::info!("MLP 3-4-4-1 with {} parameters", model.num_parameters());

    let mut optimizer = Sgd::new(model.parameters(), SgdConfig::new(LEARNING_RATE))?;
    let loss_fn = MSELoss::default();
    // Parameters are the only nodes that outlive an epoch.
    let checkpoint = graph.checkpoint();

    for epoch in 0..EPOCHS {
        let predictions = xs
            .iter()
            .map(|x| predict(&graph, &model, x))
            .collect::<Result<Vec<_>, _>>()?;
        let targets: Vec<Var<'_>> = ys.iter().map(|&y| graph.constant(y)).collect();
        let loss = loss_fn.calculate(&predictions, &targets)?;

        loss.backward_with(BackwardOptions::new().retain_grads(false).retain_graph(true))?;
        let stats = GradStats::collect(optimizer.params());
        log::info!("epoch {:>2} | loss {:.6} | {}", epoch, loss.data(), stats);

        optimizer.step()?;

        if epoch == EPOCHS - 1 {
            match loss.visualize("mlp_graph") {
                Ok(path) => log::info!("computation graph rendered to {}", path.display()),
                Err(e) => log::warn!("graph not rendered: {}", e),
            }
        }

        optimizer.zero_grad();
        graph.rewind(checkpoint);
    }

    for (x, y) in xs.iter().zip(ys) {
        let prediction = predict(&graph, &model, x)?;
        log::info!("{:?} -> {:+.4} (target {:+.1})", x, prediction.data(), y);
    }
    graph.rewind(checkpoint);
    Ok(())
}
