use super::*;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Value::new(2.0);
    let b = Value::new(3.5);
    let out = add_op(&a, &b);
    assert_relative_eq!(out.item(), 5.5);
    assert_eq!(out.op(), Some("+"));
    assert!(!out.is_leaf());
}

#[test]
fn test_add_backward_routes_gradient_to_both_operands() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let out = add_op(&a, &b);
    out.backward().unwrap();

    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), 1.0);
    assert_relative_eq!(out.grad(), 1.0); // seed
}

#[test]
fn test_add_same_node_twice_accumulates() {
    // Diamond case: b = a + a must sum over both usages, not overwrite.
    let a = Value::new(3.0);
    let b = add_op(&a, &a);
    b.backward().unwrap();

    assert_relative_eq!(b.item(), 6.0);
    assert_relative_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_constant_coercion_is_commutative() {
    let a = Value::new(4.0);
    let left = 3.0 + &a;
    let right = &a + 3.0;
    assert_relative_eq!(left.item(), right.item());
    assert_eq!(left, right);
}
