//! # Operation builders (`ops`)
//!
//! One builder per supported operation. Each `xxx_op` function evaluates the result
//! eagerly, appends a node to the operands' [`Graph`](crate::Graph) and attaches a
//! [`BackwardOp`](crate::autograd::BackwardOp) when the result requires grad.
//! The same builders are reachable through `std::ops` operators and `Var` methods.
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div.
//! - [`math_elem`]: exp, tanh.

pub mod arithmetic;
pub mod math_elem;

pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, tanh_op};
