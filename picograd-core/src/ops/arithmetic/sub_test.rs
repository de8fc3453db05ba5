use super::*;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward() {
    let a = Value::new(7.0);
    let b = Value::new(2.5);
    let out = sub_op(&a, &b);
    assert_relative_eq!(out.item(), 4.5);
}

#[test]
fn test_sub_backward() {
    let a = Value::new(7.0);
    let b = Value::new(2.5);
    let out = sub_op(&a, &b);
    out.backward().unwrap();

    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_mixed_operands() {
    let a = Value::new(3.0);
    let left = 10.0 - &a;
    let right = &a - 10.0;
    assert_relative_eq!(left.item(), 7.0);
    assert_relative_eq!(right.item(), -7.0);
}
