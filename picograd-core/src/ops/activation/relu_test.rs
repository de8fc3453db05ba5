use super::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_relu_passes_positive_inputs() {
    let a = Value::new(2.5);
    let out = relu_op(&a);
    out.backward().unwrap();
    assert_relative_eq!(out.item(), 2.5);
    assert_relative_eq!(a.grad(), 1.0);
}

#[test]
fn test_relu_blocks_negative_inputs() {
    let a = Value::new(-3.0);
    let out = relu_op(&a);
    out.backward().unwrap();
    assert_abs_diff_eq!(out.item(), 0.0);
    assert_abs_diff_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_gate_is_strict_at_zero() {
    let a = Value::new(0.0);
    let out = relu_op(&a);
    out.backward().unwrap();
    assert_abs_diff_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_scales_upstream_gradient() {
    // out = 3 * relu(a): gradient through the gate is scaled by 3.
    let a = Value::new(1.0);
    let out = 3.0 * &relu_op(&a);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), 3.0);
}
