//! Matching patterns against expressions.
//!
//! A pattern is an ordinary [`Expr`] that may contain [`Expr::Placeholder`] nodes. A placeholder
//! matches any sub-expression the first time it is seen. Every later occurrence of the same
//! placeholder must match a sub-expression alpha-equal to the first one, so the pattern `x + x`
//! matches `(a * b) + (c * d)` but not `a + (a * b)`.
//!
//! Everything else in a pattern must line up exactly with the target: same node kinds, same
//! operators, same function names and arities, and equal constants.

use crate::{
    expr::{AlphaMap, Expr},
    name::VariableName,
};
use std::collections::HashMap;

/// The bindings discovered while matching a pattern against an expression.
///
/// A fresh instance must be used for every match attempt. A failed attempt can leave bindings
/// behind, which would wrongly constrain the next attempt.
#[derive(Debug, Clone, Default)]
pub struct MatchSubstitutions {
    /// The sub-expression each placeholder was bound to.
    matched: HashMap<VariableName, Expr>,

    /// The alignment of variables discovered while checking repeated placeholders. Maps the
    /// variables of the first binding of a placeholder to the variables of later occurrences.
    variables: AlphaMap,
}

impl MatchSubstitutions {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sub-expression the given placeholder was bound to, if any.
    pub fn binding(&self, placeholder: &VariableName) -> Option<&Expr> {
        self.matched.get(placeholder)
    }

    /// Returns an iterator over the placeholders and the sub-expressions they were bound to, in
    /// arbitrary order.
    pub fn bindings(&self) -> impl Iterator<Item = (&VariableName, &Expr)> {
        self.matched.iter()
    }

    /// Returns the variable alignment discovered during the match.
    pub fn variables(&self) -> &AlphaMap {
        &self.variables
    }
}

impl Expr {
    /// Checks if this pattern matches `other`, recording placeholder bindings in `ctx`.
    ///
    /// Bindings made while matching an earlier parameter constrain the later ones. See the
    /// [module-level documentation](crate::pattern) for the matching rules.
    pub fn matches(&self, other: &Expr, ctx: &mut MatchSubstitutions) -> bool {
        match (self, other) {
            (Expr::Placeholder(name), _) => match ctx.matched.get(name) {
                Some(bound) => bound.alpha_eq_with(other, &mut ctx.variables),
                None => {
                    ctx.matched.insert(name.clone(), other.clone());
                    true
                },
            },
            (Expr::Variable(lhs), Expr::Variable(rhs)) => ctx.variables.unify(lhs, rhs),
            (Expr::Constant(_), Expr::Constant(_)) => self == other,
            (Expr::Binary(kind, lhs, rhs), Expr::Binary(other_kind, other_lhs, other_rhs)) => {
                kind == other_kind
                    && lhs.matches(other_lhs, ctx)
                    && rhs.matches(other_rhs, ctx)
            },
            (Expr::Unary(kind, operand), Expr::Unary(other_kind, other_operand)) => {
                kind == other_kind && operand.matches(other_operand, ctx)
            },
            (Expr::Call(function, args), Expr::Call(other_function, other_args)) => {
                function == other_function
                    && args.len() == other_args.len()
                    && args.iter()
                        .zip(other_args)
                        .all(|(arg, other_arg)| arg.matches(other_arg, ctx))
            },
            _ => false,
        }
    }
}
