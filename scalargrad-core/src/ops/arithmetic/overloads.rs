//! `std::ops` overloads for [`Value`], including mixed forms with bare `f64`
//! constants on either side.
//!
//! A constant is wrapped into a fresh unlabelled leaf of the node's graph before
//! the builder runs. Commutative forms (`c + a`, `c * a`) reuse the builder with
//! the node first; `c - a` is `c + (-a)` and `c / a` is `c * a^-1`.
//!
//! # Panics
//! Operator traits cannot return errors, so combining two values from different
//! graphs panics. Use the `_op` functions to get a `Result` instead.

use super::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::Pow;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn or_panic(result: Result<Value<'_>, ScalarGradError>) -> Value<'_> {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

// --- Addition ---

impl<'g> Add for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Value<'g> {
        or_panic(add_op(self, rhs))
    }
}

impl<'g> Add<f64> for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph().leaf(rhs);
        or_panic(add_op(self, rhs))
    }
}

impl<'g> Add<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Value<'g> {
        rhs + self
    }
}

// --- Multiplication ---

impl<'g> Mul for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Value<'g> {
        or_panic(mul_op(self, rhs))
    }
}

impl<'g> Mul<f64> for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph().leaf(rhs);
        or_panic(mul_op(self, rhs))
    }
}

impl<'g> Mul<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Value<'g> {
        rhs * self
    }
}

// --- Subtraction ---

impl<'g> Sub for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Value<'g> {
        or_panic(sub_op(self, rhs))
    }
}

impl<'g> Sub<f64> for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph().leaf(rhs);
        or_panic(sub_op(self, rhs))
    }
}

impl<'g> Sub<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Value<'g> {
        let lhs = rhs.graph().leaf(self);
        or_panic(add_op(lhs, neg_op(rhs)))
    }
}

// --- Division ---

impl<'g> Div for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Value<'g> {
        or_panic(div_op(self, rhs))
    }
}

impl<'g> Div<f64> for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: f64) -> Value<'g> {
        let rhs = self.graph().leaf(rhs);
        or_panic(div_op(self, rhs))
    }
}

impl<'g> Div<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Value<'g> {
        let lhs = rhs.graph().leaf(self);
        or_panic(div_op(lhs, rhs))
    }
}

// --- Negation and powers ---

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self)
    }
}

impl<'g> Pow<f64> for Value<'g> {
    type Output = Value<'g>;

    fn pow(self, k: f64) -> Value<'g> {
        pow_op(self, k)
    }
}

impl<'g> Pow<i32> for Value<'g> {
    type Output = Value<'g>;

    fn pow(self, k: i32) -> Value<'g> {
        pow_op(self, f64::from(k))
    }
}
