use super::*;
use crate::autograd::Graph;
use approx::assert_relative_eq;

#[test]
fn test_mse_sum() {
    let graph = Graph::new();
    let p = [graph.parameter(0.5), graph.parameter(-1.0)];
    let t = [graph.constant(1.0), graph.constant(1.0)];
    let loss = MSELoss::default().calculate(&p, &t).unwrap();
    assert_relative_eq!(loss.data(), 0.25 + 4.0, epsilon = 1e-12);

    loss.backward().unwrap();
    assert_relative_eq!(p[0].grad(), 2.0 * (0.5 - 1.0), epsilon = 1e-12);
    assert_relative_eq!(p[1].grad(), 2.0 * (-1.0 - 1.0), epsilon = 1e-12);
    assert_eq!(t[0].grad(), 0.0);
}

#[test]
fn test_mse_mean() {
    let graph = Graph::new();
    let p = [graph.parameter(0.5), graph.parameter(-1.0)];
    let t = [graph.constant(1.0), graph.constant(1.0)];
    let loss = MSELoss::new(Reduction::Mean).calculate(&p, &t).unwrap();
    assert_relative_eq!(loss.data(), 4.25 / 2.0, epsilon = 1e-12);

    loss.backward().unwrap();
    assert_relative_eq!(p[0].grad(), 0.5 - 1.0, epsilon = 1e-12);
    assert_relative_eq!(p[1].grad(), -1.0 - 1.0, epsilon = 1e-12);
}

#[test]
fn test_mse_perfect_prediction() {
    let graph = Graph::new();
    let p = [graph.parameter(0.3)];
    let t = [graph.constant(0.3)];
    let loss = MSELoss::default().calculate(&p, &t).unwrap();
    assert_eq!(loss.data(), 0.0);
}

#[test]
fn test_mse_shape_mismatch() {
    let graph = Graph::new();
    let p = [graph.parameter(0.5), graph.parameter(-1.0)];
    let t = [graph.constant(1.0)];
    let err = MSELoss::default().calculate(&p, &t).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::ShapeMismatch {
            expected: 2,
            actual: 1,
            operation: "MSELoss calculate".to_string(),
        }
    );
}

#[test]
fn test_mse_empty_input() {
    let loss = MSELoss::default().calculate(&[], &[]);
    assert!(matches!(loss, Err(ScalarGradError::EmptyInput { .. })));
}

#[test]
fn test_reduction_from_str() {
    assert_eq!(Reduction::from_str("SUM").unwrap(), Reduction::Sum);
    assert_eq!(Reduction::from_str("mean").unwrap(), Reduction::Mean);
    assert!(Reduction::from_str("max").is_err());
    assert_eq!(MSELoss::new(Reduction::Mean).reduction(), Reduction::Mean);
}
