//! The tree representation of algebraic expressions.
//!
//! An [`Expr`] is an immutable tree. Every node is one of a small, closed set of variants, and
//! every transformation in this crate (renaming, substitution, rewriting) builds a new tree
//! instead of editing an existing one.
//!
//! # Alpha-equality
//!
//! The [`PartialEq`], [`Eq`] and [`Hash`](std::hash::Hash) implementations of [`Expr`] do
//! **not** compare variables by name. Two expressions are equal if they have the same shape and
//! there is a consistent, one-to-one renaming of the variables of one into the variables of the
//! other. This is the same idea as alpha-equivalence in the lambda calculus:
//!
//! - `a + b == c + d`
//! - `a + a == b + b`
//! - `a * a != a * b`, because `a` cannot be renamed to both `a` and `b`
//! - `a * b != a * a`, because `a` and `b` cannot both be renamed to `a`
//!
//! The mapping is discovered left to right, so equality is computed directionally, but the
//! resulting relation is symmetric. Hashing assigns every distinct variable the order in which it
//! is first seen during a depth-first traversal, and hashes that number instead of the variable
//! itself, so alpha-equal expressions always hash identically.
//!
//! See the [`alpha`] module for the details.
//!
//! [`alpha`]: self::alpha

pub mod alpha;
mod iter;
mod ops;

use crate::name::{FunctionName, VariableName};
use iter::ExprIter;
use once_cell::sync::Lazy;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use alpha::AlphaMap;

/// The constant `0`.
pub static ZERO: Lazy<Expr> = Lazy::new(|| Expr::Constant(0.0));

/// The constant `1`.
pub static ONE: Lazy<Expr> = Lazy::new(|| Expr::Constant(1.0));

/// An operator that takes two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOpKind {
    Add,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOpKind {
    /// Returns the symbol used for this operator in prefix notation and MathML.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Exponentiate => "^",
        }
    }
}

/// An operator that takes one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    NaturalLog,
    Cosine,
    Negate,
}

impl UnaryOpKind {
    /// Returns the symbol used for this operator in prefix notation and MathML.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::NaturalLog => "log",
            Self::Cosine => "cos",
            Self::Negate => "-",
        }
    }
}

/// An algebraic expression.
///
/// For more information about equality of expressions, see the
/// [module-level documentation](crate::expr).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numerical literal, such as `2` or `3.14`.
    Constant(f64),

    /// A variable, such as `x` or `y`.
    Variable(VariableName),

    /// A pattern variable. Inside a pattern, it can match any sub-expression. See
    /// [`Expr::matches`].
    Placeholder(VariableName),

    /// An operator applied to two operands.
    Binary(BinaryOpKind, Box<Expr>, Box<Expr>),

    /// An operator applied to one operand.
    Unary(UnaryOpKind, Box<Expr>),

    /// A named function applied to any number of arguments, such as `f(x, y)`.
    Call(FunctionName, Vec<Expr>),
}

impl Expr {
    /// Creates a constant.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable node referencing the given name.
    pub fn variable(name: &VariableName) -> Self {
        Self::Variable(name.clone())
    }

    /// Creates a placeholder with a fresh name.
    pub fn placeholder() -> Self {
        Self::Placeholder(VariableName::new())
    }

    /// Creates a binary operation.
    pub fn binary(kind: BinaryOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(kind, Box::new(lhs), Box::new(rhs))
    }

    /// Creates a unary operation.
    pub fn unary(kind: UnaryOpKind, operand: Expr) -> Self {
        Self::Unary(kind, Box::new(operand))
    }

    /// Creates `self ^ exponent`.
    pub fn pow(self, exponent: Expr) -> Self {
        Self::binary(BinaryOpKind::Exponentiate, self, exponent)
    }

    /// Creates `log(self)`, the natural logarithm.
    pub fn ln(self) -> Self {
        Self::unary(UnaryOpKind::NaturalLog, self)
    }

    /// Creates `cos(self)`.
    pub fn cos(self) -> Self {
        Self::unary(UnaryOpKind::Cosine, self)
    }

    /// Creates a function call.
    pub fn call(function: &FunctionName, args: Vec<Expr>) -> Self {
        Self::Call(function.clone(), args)
    }

    /// Returns the direct sub-expressions of this node, in left-to-right order.
    ///
    /// The parameters of a node completely determine its substructure: equality, hashing and
    /// traversal all go through this list.
    pub fn parameters(&self) -> Vec<&Expr> {
        match self {
            Self::Constant(_) | Self::Variable(_) | Self::Placeholder(_) => Vec::new(),
            Self::Binary(_, lhs, rhs) => vec![&**lhs, &**rhs],
            Self::Unary(_, operand) => vec![&**operand],
            Self::Call(_, args) => args.iter().collect(),
        }
    }

    /// If the expression is a [`Expr::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Variable`], returns a reference to its name.
    pub fn as_variable(&self) -> Option<&VariableName> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Placeholder`].
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Returns true if the expression contains no variables or placeholders.
    pub fn is_constant(&self) -> bool {
        self.post_order_iter()
            .all(|expr| !matches!(expr, Self::Variable(_) | Self::Placeholder(_)))
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the distinct names of the variables and placeholders in the expression, in the
    /// order they are first encountered in a left-to-right depth-first traversal.
    pub fn variables(&self) -> Vec<VariableName> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Self::Variable(name) | Self::Placeholder(name) => {
                    if seen.insert(name) {
                        names.push(name.clone());
                    }
                },
                _ => stack.extend(expr.parameters().into_iter().rev()),
            }
        }
        names
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parameters_order() {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("b");
        let expr = Expr::variable(&a) + Expr::variable(&b);
        let params = expr.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].as_variable(), Some(&a));
        assert_eq!(params[1].as_variable(), Some(&b));

        let f = FunctionName::labeled("f");
        let call = Expr::call(&f, vec![Expr::constant(1.0), Expr::variable(&a), Expr::constant(2.0)]);
        assert_eq!(call.parameters().len(), 3);
        assert!(Expr::constant(1.0).parameters().is_empty());
    }

    #[test]
    fn variables_first_seen_order() {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("b");
        let c = VariableName::labeled("c");

        // (b * a) + (c + b)
        let expr = Expr::variable(&b) * Expr::variable(&a)
            + (Expr::variable(&c) + Expr::variable(&b));
        assert_eq!(expr.variables(), vec![b, a, c]);
    }

    #[test]
    fn constant_and_count() {
        let x = VariableName::labeled("x");
        let expr = (Expr::constant(2.0) * Expr::constant(3.0)).cos();
        assert!(expr.is_constant());
        assert_eq!(expr.node_count(), 4);

        let expr = Expr::constant(2.0) + Expr::variable(&x).ln();
        assert!(!expr.is_constant());
        assert_eq!(expr.node_count(), 4);
    }
}
