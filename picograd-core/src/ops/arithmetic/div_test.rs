use super::*;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Value::new(6.0);
    let b = Value::new(2.0);
    let out = div_op(&a, &b);
    assert_relative_eq!(out.item(), 3.0);
}

#[test]
fn test_div_backward() {
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2.
    let a = Value::new(6.0);
    let b = Value::new(2.0);
    let out = div_op(&a, &b);
    out.backward().unwrap();

    assert_relative_eq!(a.grad(), 0.5);
    assert_relative_eq!(b.grad(), -1.5);
}

#[test]
fn test_div_by_zero_propagates_infinity() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    let out = div_op(&a, &b);
    assert!(out.item().is_infinite());
    // Backward still runs; gradients become IEEE special values.
    out.backward().unwrap();
    assert!(a.grad().is_infinite());
}

#[test]
fn test_div_mixed_operands() {
    let a = Value::new(4.0);
    let left = 2.0 / &a;
    let right = &a / 2.0;
    assert_relative_eq!(left.item(), 0.5);
    assert_relative_eq!(right.item(), 2.0);
}
