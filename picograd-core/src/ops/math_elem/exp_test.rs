use super::*;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let a = Value::new(2.0);
    let out = exp_op(&a);
    assert_relative_eq!(out.item(), 2.0_f64.exp());
    assert_eq!(out.op(), Some("exp"));
}

#[test]
fn test_exp_backward_is_output_value() {
    let a = Value::new(2.0);
    let out = exp_op(&a);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), out.item());
}

#[test]
fn test_exp_of_zero() {
    let a = Value::new(0.0);
    let out = exp_op(&a);
    out.backward().unwrap();
    assert_relative_eq!(out.item(), 1.0);
    assert_relative_eq!(a.grad(), 1.0);
}

#[test]
fn test_exp_overflow_propagates_infinity() {
    let a = Value::new(1000.0);
    let out = exp_op(&a);
    assert!(out.item().is_infinite());
    out.backward().unwrap();
    assert!(a.grad().is_infinite());
}
