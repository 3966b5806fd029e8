use super::*;
use crate::error::ScalarGradError;
use crate::ops::pow_op;
use approx::assert_relative_eq;

#[test]
fn test_backward_options_default() {
    let options = BackwardOptions::default();
    assert_eq!(options.seed, 1.0);
    assert!(options.retain_grads);
    assert!(!options.retain_graph);

    let custom = BackwardOptions::new().seed(2.0).retain_grads(false).retain_graph(true);
    assert_eq!(custom.seed, 2.0);
    assert!(!custom.retain_grads);
    assert!(custom.retain_graph);
}

#[test]
fn test_end_to_end_neuron_expression() {
    let graph = Graph::new();
    let a = graph.parameter(2.0);
    let b = graph.parameter(-3.0);
    let c = graph.parameter(10.0);
    let d = a * b + c;
    let e = d.tanh();

    assert_eq!(d.data(), 4.0);
    assert_relative_eq!(e.data(), 4.0_f64.tanh(), epsilon = 1e-15);

    e.backward().unwrap();

    let t = 4.0_f64.tanh();
    let local = 1.0 - t * t;
    assert_eq!(e.grad(), 1.0);
    assert_relative_eq!(d.grad(), local, epsilon = 1e-15);
    assert_relative_eq!(c.grad(), local, epsilon = 1e-15);
    assert_relative_eq!(a.grad(), -3.0 * local, epsilon = 1e-15);
    assert_relative_eq!(b.grad(), 2.0 * local, epsilon = 1e-15);
}

#[test]
fn test_shared_subexpression_accumulates() {
    let graph = Graph::new();
    let x = graph.parameter(3.0);
    let y = x * x + x;
    y.backward().unwrap();
    assert_eq!(y.data(), 12.0);
    assert_eq!(x.grad(), 7.0);
}

#[test]
fn test_seed_scales_gradients() {
    let graph = Graph::new();
    let a = graph.parameter(1.5);
    let b = graph.parameter(-0.5);
    let y = a * b;
    y.backward_with(BackwardOptions::new().seed(2.0)).unwrap();
    assert_eq!(y.grad(), 2.0);
    assert_eq!(a.grad(), -1.0);
    assert_eq!(b.grad(), 3.0);
}

#[test]
fn test_retain_grads_false_zeroes_interior_nodes() {
    let graph = Graph::new();
    let a = graph.parameter(0.5);
    let b = graph.parameter(2.0);
    let m = a * b;
    let y = m.tanh();

    y.backward_with(BackwardOptions::new().retain_grads(false)).unwrap();

    assert_eq!(m.grad(), 0.0);
    assert_eq!(y.grad(), 0.0);
    let t = 1.0_f64.tanh();
    let local = 1.0 - t * t;
    assert_relative_eq!(a.grad(), 2.0 * local, epsilon = 1e-15);
    assert_relative_eq!(b.grad(), 0.5 * local, epsilon = 1e-15);
}

#[test]
fn test_default_backward_severs_graph() {
    let graph = Graph::new();
    let a = graph.parameter(2.0);
    let b = graph.parameter(4.0);
    let m = a * b;
    let y = m + a;

    y.backward().unwrap();
    assert_eq!(a.grad(), 5.0);
    assert_eq!(b.grad(), 2.0);

    for node in [m, y] {
        assert!(!node.has_grad_fn());
        assert!(node.predecessors().is_empty());
    }
    // The operation tag survives severing.
    assert_eq!(y.op(), crate::autograd::OpKind::Add);

    // A second pass only re-seeds the root.
    y.backward().unwrap();
    assert_eq!(a.grad(), 5.0);
    assert_eq!(b.grad(), 2.0);
    assert_eq!(y.grad(), 1.0);
}

#[test]
fn test_retain_graph_allows_second_pass() {
    let graph = Graph::new();
    let a = graph.parameter(2.0);
    let b = graph.parameter(4.0);
    let y = a * b;
    let options = BackwardOptions::new().retain_graph(true);

    y.backward_with(options).unwrap();
    assert!(y.has_grad_fn());
    assert_eq!(y.predecessors().len(), 2);

    y.backward_with(options).unwrap();
    assert_eq!(a.grad(), 8.0);
    assert_eq!(b.grad(), 4.0);
}

#[test]
fn test_constants_receive_no_gradient() {
    let graph = Graph::new();
    let x = graph.parameter(1.0);
    let k = graph.constant(5.0);
    let y = x * k - k;
    y.backward().unwrap();
    assert_eq!(x.grad(), 5.0);
    assert_eq!(k.grad(), 0.0);
}

#[test]
fn test_constant_subgraph_has_no_rules() {
    let graph = Graph::new();
    let k1 = graph.constant(2.0);
    let k2 = graph.constant(3.0);
    let k = (k1 * k2).exp();
    assert!(!k.requires_grad());
    assert!(!k.has_grad_fn());
    assert_eq!(k.predecessors().len(), 1);

    let x = graph.parameter(0.5);
    let y = x + k;
    assert!(y.requires_grad());
    y.backward().unwrap();
    assert_eq!(x.grad(), 1.0);
    assert_eq!(k.grad(), 0.0);
    assert_eq!(k1.grad(), 0.0);
}

#[test]
fn test_backward_on_root_without_grad_only_seeds() {
    let graph = Graph::new();
    let k1 = graph.constant(2.0);
    let k2 = graph.constant(3.0);
    let y = k1 * k2;
    y.backward().unwrap();
    assert_eq!(y.grad(), 1.0);
    assert_eq!(k1.grad(), 0.0);
    assert_eq!(k2.grad(), 0.0);
}

#[test]
fn test_backward_on_leaf() {
    let graph = Graph::new();
    let a = graph.parameter(3.0);
    a.backward().unwrap();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_undefined_gradient_aborts_pass() {
    let graph = Graph::new();
    let b = graph.parameter(0.0);
    let y = b.powf(-1.0);
    assert!(y.data().is_infinite());

    let err = y.backward().unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::UndefinedGradient {
            base: 0.0,
            exponent: -1.0
        }
    );
    assert_eq!(b.grad(), 0.0);
    // Retention policy is skipped on error: the graph is still intact.
    assert!(y.has_grad_fn());
}

#[test]
fn test_undefined_gradient_with_constant_base() {
    let graph = Graph::new();
    let zero = graph.constant(0.0);
    let e = graph.parameter(0.5);
    let y = pow_op(zero, e);
    assert!(matches!(
        y.backward(),
        Err(ScalarGradError::UndefinedGradient { .. })
    ));
}

#[test]
fn test_zero_base_with_large_exponent_is_defined() {
    let graph = Graph::new();
    let b = graph.parameter(0.0);
    let e = graph.parameter(2.0);
    let y = pow_op(b, e);
    y.backward().unwrap();
    assert_eq!(y.data(), 0.0);
    assert_eq!(b.grad(), 0.0);
    // No exponent term for a base that is not strictly positive.
    assert_eq!(e.grad(), 0.0);
}

#[test]
fn test_zero_grad_keeps_data() {
    let graph = Graph::new();
    let a = graph.parameter(3.0);
    let y = a * a;
    y.backward().unwrap();
    assert_eq!(a.grad(), 6.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(a.data(), 3.0);
}
