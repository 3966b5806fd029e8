use scalargrad_core::nn::{MSELoss, Mlp, Module};
use scalargrad_core::{Graph, ScalarGradError, Var};

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The four-sample, three-feature toy dataset and its ±1 targets.
#[allow(dead_code)]
pub(crate) const XS: [[f64; 3]; 4] = [[2.0, 3.0, -1.0], [3.0, -1.0, 0.5], [0.5, 1.0, 1.0], [1.0, 1.0, -1.0]];
#[allow(dead_code)]
pub(crate) const YS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

/// Forward pass over the whole dataset followed by the summed squared error.
#[allow(dead_code)]
pub(crate) fn dataset_loss<'g>(graph: &'g Graph, model: &Mlp<'g>) -> Result<Var<'g>, ScalarGradError> {
    let mut predictions = Vec::with_capacity(XS.len());
    for x in &XS {
        let inputs: Vec<Var<'g>> = x.iter().map(|&v| graph.constant(v)).collect();
        predictions.extend(model.forward(&inputs)?);
    }
    let targets: Vec<Var<'g>> = YS.iter().map(|&y| graph.constant(y)).collect();
    MSELoss::default().calculate(&predictions, &targets)
}
