//! A catalogue of algebraic identities.
//!
//! Every identity is plain data: a pair of patterns handed to [`Equivalence`]. Adding an identity
//! does not require any change to the rewriting engine.

use crate::{expr::{Expr, ONE, ZERO}, name::VariableName};
use std::fmt::{self, Display, Formatter};
use super::Equivalence;

/// An algebraic identity that can be used as a rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    /// `a+(-a) = 0`
    AMinusA,

    /// `0+a = a`
    ZeroAddition,

    /// `a+(b+c) = (a+b)+c`
    AdditionAssociativity,

    /// `a+b = b+a`
    AdditionCommutativity,

    /// `a*b = b*a`
    MultiplicationCommutativity,

    /// `1*a = a`
    OneMultiplication,

    /// `0*a = 0`
    ZeroMultiplication,

    /// `a*(b*c) = (a*b)*c`
    MultiplicationAssociativity,
}

impl Identity {
    /// Every identity, in declaration order.
    pub const ALL: [Identity; 8] = [
        Identity::AMinusA,
        Identity::ZeroAddition,
        Identity::AdditionAssociativity,
        Identity::AdditionCommutativity,
        Identity::MultiplicationCommutativity,
        Identity::OneMultiplication,
        Identity::ZeroMultiplication,
        Identity::MultiplicationAssociativity,
    ];

    /// Builds the rule that rewrites the left side of the identity into the right side.
    ///
    /// Each call creates new placeholders, so rules built by separate calls share no names.
    pub fn equivalence(&self) -> Equivalence {
        let a = Expr::Placeholder(VariableName::labeled("a"));
        let b = Expr::Placeholder(VariableName::labeled("b"));
        let c = Expr::Placeholder(VariableName::labeled("c"));

        let (from, to) = match self {
            Self::AMinusA => (a.clone() + -a, ZERO.clone()),
            Self::ZeroAddition => (ZERO.clone() + a.clone(), a),
            Self::AdditionAssociativity => (a.clone() + (b.clone() + c.clone()), (a + b) + c),
            Self::AdditionCommutativity => (a.clone() + b.clone(), b + a),
            Self::MultiplicationCommutativity => (a.clone() * b.clone(), b * a),
            Self::OneMultiplication => (ONE.clone() * a.clone(), a),
            Self::ZeroMultiplication => (ZERO.clone() * a, ZERO.clone()),
            Self::MultiplicationAssociativity => (a.clone() * (b.clone() * c.clone()), (a * b) * c),
        };
        Equivalence::from_parts(from, to)
    }
}

/// Formats the law the identity states, such as `0+a = a`.
impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let law = match self {
            Self::AMinusA => "a+(-a) = 0",
            Self::ZeroAddition => "0+a = a",
            Self::AdditionAssociativity => "a+(b+c) = (a+b)+c",
            Self::AdditionCommutativity => "a+b = b+a",
            Self::MultiplicationCommutativity => "a*b = b*a",
            Self::OneMultiplication => "1*a = a",
            Self::ZeroMultiplication => "0*a = 0",
            Self::MultiplicationAssociativity => "a*(b*c) = (a*b)*c",
        };
        f.write_str(law)
    }
}

#[cfg(test)]
mod tests {
    use crate::{equivalence::PatternBasedRewriter, name::reset_default_names};
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(label: &str) -> Expr {
        Expr::Variable(VariableName::labeled(label))
    }

    /// Applies the identity at the given match and compares against the expected expression.
    fn check(identity: Identity, expr: Expr, index: usize, expected: Expr) {
        let result = identity.equivalence().apply(&expr, index).unwrap();
        assert_eq!(result, expected, "{} on {}", identity, expr);
    }

    #[test]
    fn patterns_are_valid() {
        for identity in Identity::ALL {
            let rule = identity.equivalence();
            let checked = Equivalence::new(rule.pattern_from().clone(), rule.pattern_to().clone());
            assert!(checked.is_ok(), "{}", identity);
        }
    }

    #[test]
    fn rules_render_as_prefix_notation() {
        assert_eq!(Identity::AMinusA.equivalence().to_string(), "(+ a (- a)) -> 0");
        assert_eq!(
            Identity::MultiplicationAssociativity.equivalence().to_string(),
            "(* a (* b c)) -> (* (* a b) c)",
        );
        assert_eq!(Identity::ZeroMultiplication.to_string(), "0*a = 0");
    }

    #[test]
    fn addition_identities() {
        let a = var("a");
        let b = var("b");
        let c = a.clone() + b.clone();

        check(Identity::AMinusA, c.clone() + -c.clone(), 0, ZERO.clone());
        check(Identity::ZeroAddition, ZERO.clone() + a.clone(), 0, a.clone());
        check(
            Identity::AdditionAssociativity,
            a.clone() + (a.clone() + a.clone()),
            0,
            (a.clone() + a.clone()) + a.clone(),
        );
        check(
            Identity::AdditionCommutativity,
            a.clone() + c.clone(),
            1,
            a.clone() + (b.clone() + a.clone()),
        );
    }

    #[test]
    fn multiplication_identities() {
        let a = var("a");
        let b = var("b");
        let c = a.clone() + b.clone();

        check(Identity::MultiplicationCommutativity, a.clone() * b.clone(), 0, b.clone() * a.clone());
        check(Identity::OneMultiplication, ONE.clone() * c.clone(), 0, c.clone());
        check(Identity::ZeroMultiplication, ZERO.clone() * a.clone(), 0, ZERO.clone());
        check(
            Identity::MultiplicationAssociativity,
            a.clone() * (b.clone() * c.clone()),
            0,
            (a.clone() * b.clone()) * c.clone(),
        );
    }

    #[test]
    fn zero_multiplication_annihilates_compound_factor() {
        let a = var("a");
        let expr = ZERO.clone() * (a.clone() + a.clone().cos());
        let rule = Identity::ZeroMultiplication.equivalence();
        assert_eq!(rule.matches(&expr), 1);
        assert_eq!(rule.apply(&expr, 0).unwrap(), ZERO.clone());
    }

    #[test]
    fn labels_are_refreshed() {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("b");
        let expr = Expr::variable(&a) * Expr::variable(&b);

        reset_default_names();
        let result = Identity::MultiplicationCommutativity.equivalence().apply(&expr, 0).unwrap();
        assert_eq!(result.to_string(), "(* x1 x2)");
    }
}
