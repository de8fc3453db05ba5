// Finite-difference verification of every primitive's analytical gradient,
// driven through the public `check_grad` helper.

use picograd_core::autograd::check_grad;
use picograd_core::Value;

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-6;

#[test]
fn grad_check_add() {
    let inputs = vec![Value::new(1.3), Value::new(-0.4)];
    check_grad(|vs| &vs[0] + &vs[1], &inputs, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_sub() {
    let inputs = vec![Value::new(2.0), Value::new(0.7)];
    check_grad(|vs| &vs[0] - &vs[1], &inputs, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_mul() {
    let inputs = vec![Value::new(-1.5), Value::new(2.2)];
    check_grad(|vs| &vs[0] * &vs[1], &inputs, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_div() {
    let inputs = vec![Value::new(3.0), Value::new(1.7)];
    check_grad(|vs| &vs[0] / &vs[1], &inputs, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_pow() {
    let inputs = vec![Value::new(1.8)];
    check_grad(|vs| vs[0].powf(3.0), &inputs, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_exp() {
    let inputs = vec![Value::new(0.9)];
    check_grad(|vs| vs[0].exp(), &inputs, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_tanh() {
    let inputs = vec![Value::new(-0.6)];
    check_grad(|vs| vs[0].tanh(), &inputs, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_relu_away_from_kink() {
    // relu is not differentiable at 0; check on both smooth sides.
    let positive = vec![Value::new(1.2)];
    check_grad(|vs| vs[0].relu(), &positive, EPSILON, TOLERANCE).unwrap();

    let negative = vec![Value::new(-1.2)];
    check_grad(|vs| vs[0].relu(), &negative, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn grad_check_composite_expression() {
    // f(a, b) = tanh(a * b + a^2) - exp(b) / (a + 3)
    let inputs = vec![Value::new(0.8), Value::new(-0.3)];
    check_grad(
        |vs| {
            let a = &vs[0];
            let b = &vs[1];
            let lhs = (&(a * b) + &a.powf(2.0)).tanh();
            let rhs = &b.exp() / &(a + 3.0);
            &lhs - &rhs
        },
        &inputs,
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}

#[test]
fn grad_check_shared_subexpression() {
    // The same intermediate feeds two consumers inside one call.
    let inputs = vec![Value::new(0.5)];
    check_grad(
        |vs| {
            let h = &vs[0] * 2.0;
            &(&h * &h) + &h
        },
        &inputs,
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}
