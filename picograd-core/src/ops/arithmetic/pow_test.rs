use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let a = Value::new(2.0);
    let out = pow_op(&a, 3.0);
    assert_relative_eq!(out.item(), 8.0);
    assert_eq!(out.op(), Some("pow"));
}

#[test]
fn test_pow_backward() {
    // d(x^3)/dx = 3x^2 = 12 at x = 2.
    let a = Value::new(2.0);
    let out = pow_op(&a, 3.0);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), 12.0);
}

#[test]
fn test_pow_fractional_exponent() {
    // sqrt: d(x^0.5)/dx = 0.5 / sqrt(x) = 0.25 at x = 4.
    let a = Value::new(4.0);
    let out = pow_op(&a, 0.5);
    out.backward().unwrap();
    assert_relative_eq!(out.item(), 2.0);
    assert_relative_eq!(a.grad(), 0.25);
}

#[test]
fn test_pow_reciprocal() {
    // d(x^-1)/dx = -x^-2 = -0.25 at x = 2.
    let a = Value::new(2.0);
    let out = pow_op(&a, -1.0);
    out.backward().unwrap();
    assert_relative_eq!(out.item(), 0.5);
    assert_relative_eq!(a.grad(), -0.25);
}

#[test]
fn test_pow_domain_edge_propagates_ieee_values() {
    // 0^-1 is infinite; no panic, no error.
    let a = Value::new(0.0);
    let out = pow_op(&a, -1.0);
    assert!(out.item().is_infinite());
    out.backward().unwrap();
    assert!(a.grad().is_infinite());
}
