use super::*;
use approx::assert_relative_eq;

#[test]
fn test_neg_forward() {
    let a = Value::new(5.0);
    let out = neg_op(&a);
    assert_relative_eq!(out.item(), -5.0);
    // Composed from multiplication, so it carries the multiply tag.
    assert_eq!(out.op(), Some("*"));
}

#[test]
fn test_neg_backward() {
    let a = Value::new(5.0);
    let out = neg_op(&a);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), -1.0);
}

#[test]
fn test_neg_operator() {
    let a = Value::new(1.5);
    let out = -&a;
    assert_relative_eq!(out.item(), -1.5);
}
