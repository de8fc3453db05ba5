// src/value/operators.rs
//
// `std::ops` surface of the engine. Every overload delegates to the `*_op`
// functions; mixed forms with `f64` coerce the plain number into a
// zero-gradient leaf first, so the uniform operand/gradient machinery
// applies in both operand orders (the compile-time replacement for the
// dynamic reversed-operator dispatch of dynamically typed autograd
// libraries).

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

// --- Addition ---

impl Add<Value> for Value {
    type Output = Value;
    fn add(self, other: Value) -> Value {
        add_op(&self, &other)
    }
}

impl<'b> Add<&'b Value> for Value {
    type Output = Value;
    fn add(self, other: &'b Value) -> Value {
        add_op(&self, other)
    }
}

impl<'a> Add<Value> for &'a Value {
    type Output = Value;
    fn add(self, other: Value) -> Value {
        add_op(self, &other)
    }
}

impl<'a, 'b> Add<&'b Value> for &'a Value {
    type Output = Value;
    fn add(self, other: &'b Value) -> Value {
        add_op(self, other)
    }
}

impl Add<f64> for Value {
    type Output = Value;
    fn add(self, other: f64) -> Value {
        add_op(&self, &Value::new(other))
    }
}

impl Add<f64> for &Value {
    type Output = Value;
    fn add(self, other: f64) -> Value {
        add_op(self, &Value::new(other))
    }
}

impl Add<Value> for f64 {
    type Output = Value;
    fn add(self, other: Value) -> Value {
        add_op(&Value::new(self), &other)
    }
}

impl Add<&Value> for f64 {
    type Output = Value;
    fn add(self, other: &Value) -> Value {
        add_op(&Value::new(self), other)
    }
}

// --- Subtraction ---

impl Sub<Value> for Value {
    type Output = Value;
    fn sub(self, other: Value) -> Value {
        sub_op(&self, &other)
    }
}

impl<'b> Sub<&'b Value> for Value {
    type Output = Value;
    fn sub(self, other: &'b Value) -> Value {
        sub_op(&self, other)
    }
}

impl<'a> Sub<Value> for &'a Value {
    type Output = Value;
    fn sub(self, other: Value) -> Value {
        sub_op(self, &other)
    }
}

impl<'a, 'b> Sub<&'b Value> for &'a Value {
    type Output = Value;
    fn sub(self, other: &'b Value) -> Value {
        sub_op(self, other)
    }
}

impl Sub<f64> for Value {
    type Output = Value;
    fn sub(self, other: f64) -> Value {
        sub_op(&self, &Value::new(other))
    }
}

impl Sub<f64> for &Value {
    type Output = Value;
    fn sub(self, other: f64) -> Value {
        sub_op(self, &Value::new(other))
    }
}

impl Sub<Value> for f64 {
    type Output = Value;
    fn sub(self, other: Value) -> Value {
        sub_op(&Value::new(self), &other)
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;
    fn sub(self, other: &Value) -> Value {
        sub_op(&Value::new(self), other)
    }
}

// --- Multiplication ---

impl Mul<Value> for Value {
    type Output = Value;
    fn mul(self, other: Value) -> Value {
        mul_op(&self, &other)
    }
}

impl<'b> Mul<&'b Value> for Value {
    type Output = Value;
    fn mul(self, other: &'b Value) -> Value {
        mul_op(&self, other)
    }
}

impl<'a> Mul<Value> for &'a Value {
    type Output = Value;
    fn mul(self, other: Value) -> Value {
        mul_op(self, &other)
    }
}

impl<'a, 'b> Mul<&'b Value> for &'a Value {
    type Output = Value;
    fn mul(self, other: &'b Value) -> Value {
        mul_op(self, other)
    }
}

impl Mul<f64> for Value {
    type Output = Value;
    fn mul(self, other: f64) -> Value {
        mul_op(&self, &Value::new(other))
    }
}

impl Mul<f64> for &Value {
    type Output = Value;
    fn mul(self, other: f64) -> Value {
        mul_op(self, &Value::new(other))
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    fn mul(self, other: Value) -> Value {
        mul_op(&Value::new(self), &other)
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;
    fn mul(self, other: &Value) -> Value {
        mul_op(&Value::new(self), other)
    }
}

// --- Division ---

impl Div<Value> for Value {
    type Output = Value;
    fn div(self, other: Value) -> Value {
        div_op(&self, &other)
    }
}

impl<'b> Div<&'b Value> for Value {
    type Output = Value;
    fn div(self, other: &'b Value) -> Value {
        div_op(&self, other)
    }
}

impl<'a> Div<Value> for &'a Value {
    type Output = Value;
    fn div(self, other: Value) -> Value {
        div_op(self, &other)
    }
}

impl<'a, 'b> Div<&'b Value> for &'a Value {
    type Output = Value;
    fn div(self, other: &'b Value) -> Value {
        div_op(self, other)
    }
}

impl Div<f64> for Value {
    type Output = Value;
    fn div(self, other: f64) -> Value {
        div_op(&self, &Value::new(other))
    }
}

impl Div<f64> for &Value {
    type Output = Value;
    fn div(self, other: f64) -> Value {
        div_op(self, &Value::new(other))
    }
}

impl Div<Value> for f64 {
    type Output = Value;
    fn div(self, other: Value) -> Value {
        div_op(&Value::new(self), &other)
    }
}

impl Div<&Value> for f64 {
    type Output = Value;
    fn div(self, other: &Value) -> Value {
        div_op(&Value::new(self), other)
    }
}

// --- Negation ---

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

// --- Summation (the `sum(w_i * x_i)` idiom of the network layer) ---

impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| acc + v)
    }
}
