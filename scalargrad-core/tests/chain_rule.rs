//! Analytical gradients against central finite differences, for every operation, at
//! several input magnitudes.

use rand::Rng;
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::ops::pow_op;

mod common;
use common::{sample_with_magnitude, seeded_rng};

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-4;
const SAMPLES: usize = 20;

#[test]
fn test_binary_arithmetic_gradients() {
    let mut rng = seeded_rng(11);
    for magnitude in [0.1, 1.0, 10.0] {
        for _ in 0..SAMPLES {
            let inputs = [
                sample_with_magnitude(&mut rng, magnitude),
                sample_with_magnitude(&mut rng, magnitude),
            ];
            check_grad(|_g, v| Ok(v[0] + v[1]), &inputs, EPSILON, TOLERANCE).unwrap();
            check_grad(|_g, v| Ok(v[0] - v[1]), &inputs, EPSILON, TOLERANCE).unwrap();
            check_grad(|_g, v| Ok(v[0] * v[1]), &inputs, EPSILON, TOLERANCE).unwrap();
            check_grad(|_g, v| v[0].try_div(v[1]), &inputs, EPSILON, TOLERANCE).unwrap();
            check_grad(|_g, v| Ok(-v[0] * v[1]), &inputs, EPSILON, TOLERANCE).unwrap();
        }
    }
}

#[test]
fn test_pow_gradients() {
    let mut rng = seeded_rng(12);
    for _ in 0..SAMPLES {
        // Positive base so that both partial derivatives are defined.
        let base = 0.5 + 2.5 * rng.gen::<f64>();
        let exponent = sample_with_magnitude(&mut rng, 1.0);
        check_grad(
            |_g, v| Ok(pow_op(v[0], v[1])),
            &[base, exponent],
            EPSILON,
            TOLERANCE,
        )
        .unwrap();
    }
}

#[test]
fn test_unary_gradients() {
    let mut rng = seeded_rng(13);
    for magnitude in [0.1, 1.0, 5.0] {
        for _ in 0..SAMPLES {
            let x = [sample_with_magnitude(&mut rng, magnitude)];
            check_grad(|_g, v| Ok(v[0].exp()), &x, EPSILON, TOLERANCE).unwrap();
            check_grad(|_g, v| Ok(v[0].tanh()), &x, EPSILON, TOLERANCE).unwrap();
            check_grad(|_g, v| Ok(-v[0]), &x, EPSILON, TOLERANCE).unwrap();
        }
    }
}

#[test]
fn test_composite_gradients() {
    let mut rng = seeded_rng(14);
    for _ in 0..SAMPLES {
        let inputs = [
            sample_with_magnitude(&mut rng, 1.0),
            sample_with_magnitude(&mut rng, 1.0),
            sample_with_magnitude(&mut rng, 1.0),
        ];
        check_grad(
            |_g, v| {
                let h = (v[0] * v[1] + v[2]).tanh();
                Ok(h * h.exp() - v[0] * v[0])
            },
            &inputs,
            EPSILON,
            TOLERANCE,
        )
        .unwrap();
    }
}
