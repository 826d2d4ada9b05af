//! Operator overloads for building expressions.
//!
//! These only build nodes. No folding of constants or other simplification is performed, so
//! `Expr::constant(1.0) + Expr::constant(2.0)` is the tree `(+ 1 2)`, not the constant `3`.

use super::{BinaryOpKind, Expr, UnaryOpKind};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::binary(BinaryOpKind::Add, self, rhs)
    }
}

/// `a - b` is represented as `a + (-b)`.
impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::binary(BinaryOpKind::Multiply, self, rhs)
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::binary(BinaryOpKind::Divide, self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::unary(UnaryOpKind::Negate, self)
    }
}
