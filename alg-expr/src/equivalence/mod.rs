//! Rewrite rules built from a pair of patterns.
//!
//! An [`Equivalence`] states that any sub-expression matching one pattern can be replaced by the
//! other pattern, with the placeholders of the second pattern filled in by whatever the
//! placeholders of the first pattern matched. For example, the rule `x + y ⟶ y + x` turns
//! `a + (b * c)` into `(b * c) + a`.
//!
//! # Matches
//!
//! A rule can match at many places in an expression, including places nested inside other
//! matches. Matches are numbered from `0` in the order their roots are visited by a pre-order,
//! left-to-right traversal of the expression, so the outermost, leftmost match comes first.
//! [`PatternBasedRewriter::matches`] returns the number of matches, and
//! [`PatternBasedRewriter::apply`] rewrites exactly one of them, chosen by its index:
//!
//! ```
//! use alg_expr::{
//!     equivalence::{Identity, PatternBasedRewriter},
//!     expr::Expr,
//!     name::VariableName,
//! };
//!
//! let a = Expr::Variable(VariableName::labeled("a"));
//! let b = Expr::Variable(VariableName::labeled("b"));
//!
//! // a + (b + a)
//! let expr = a.clone() + (b.clone() + a.clone());
//! let commutativity = Identity::AdditionCommutativity.equivalence();
//! assert_eq!(commutativity.matches(&expr), 2);
//!
//! // rewrite the inner `b + a`
//! let rewritten = commutativity.apply(&expr, 1).unwrap();
//! assert_eq!(rewritten, a.clone() + (a + b));
//! ```
//!
//! # Variable names
//!
//! Every variable of the result of [`PatternBasedRewriter::apply`] is renamed to a fresh name, as
//! if by [`refresh_all_variables`]. The result is alpha-equal to the rewritten expression, but the
//! original labels are lost. Callers that want to keep track of variables must compare results
//! structurally.

mod error;
pub mod identities;

use alg_error::Error;
use crate::{
    expr::Expr,
    name::{with_default_names, NameGenerator, VariableName},
    pattern::MatchSubstitutions,
    rewrite::{refresh_all_variables_with, walk, Rewriter},
};
use log::{debug, trace};
use std::fmt::{self, Display, Formatter};

pub use error::{FreeVariableInPattern, MatchIndexOutOfRange, UnboundPlaceholder};
pub use identities::Identity;

/// A rewrite rule that can be applied to the matches of a pattern in an expression.
pub trait PatternBasedRewriter {
    /// Returns the number of sub-expressions of `expr` (including `expr` itself) that the rule
    /// can be applied to.
    fn matches(&self, expr: &Expr) -> usize;

    /// Applies the rule to the match with the given index, minting fresh variable names with the
    /// given generator.
    ///
    /// Returns an error if there are not more than `index` matches.
    fn apply_with(&self, expr: &Expr, index: usize, names: &mut NameGenerator) -> Result<Expr, Error>;

    /// Applies the rule to the match with the given index, minting fresh variable names with the
    /// default generator of the current thread.
    ///
    /// Returns an error if there are not more than `index` matches.
    fn apply(&self, expr: &Expr, index: usize) -> Result<Expr, Error> {
        with_default_names(|names| self.apply_with(expr, index, names))
    }
}

/// Returns the nodes of the expression in pre-order. The position of a node in the returned list
/// is its index in [`Expr::prefix_spans`].
fn pre_order(expr: &Expr) -> Vec<&Expr> {
    let mut nodes = Vec::new();
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        nodes.push(expr);
        stack.extend(expr.parameters().into_iter().rev());
    }
    nodes
}

/// A rule that replaces sub-expressions matching `pattern_from` with `pattern_to`.
#[derive(Debug, Clone)]
pub struct Equivalence {
    pattern_from: Expr,
    pattern_to: Expr,
}

impl Equivalence {
    /// Creates a rule that replaces sub-expressions matching `pattern_from` with `pattern_to`.
    ///
    /// Returns an error if `pattern_from` contains an ordinary variable, or if `pattern_to`
    /// contains a placeholder that does not appear in `pattern_from`.
    pub fn new(pattern_from: Expr, pattern_to: Expr) -> Result<Self, Error> {
        let from_nodes = pre_order(&pattern_from);
        if let Some((node, name)) = from_nodes.iter()
            .enumerate()
            .find_map(|(node, expr)| Some((node, expr.as_variable()?)))
        {
            return Err(Error::new(
                vec![pattern_from.prefix_spans().span(node)],
                FreeVariableInPattern { name: name.label().to_string() },
            ));
        }

        let bound = pattern_from.variables();
        if let Some((node, name)) = pre_order(&pattern_to).into_iter()
            .enumerate()
            .find_map(|(node, expr)| match expr {
                Expr::Placeholder(name) if !bound.contains(name) => Some((node, name)),
                _ => None,
            })
        {
            return Err(Error::new(
                vec![pattern_to.prefix_spans().span(node)],
                UnboundPlaceholder { name: name.label().to_string() },
            ));
        }

        Ok(Self::from_parts(pattern_from, pattern_to))
    }

    /// Creates a rule without validating the patterns.
    pub(crate) fn from_parts(pattern_from: Expr, pattern_to: Expr) -> Self {
        Self { pattern_from, pattern_to }
    }

    /// Returns the pattern that is rewritten from.
    pub fn pattern_from(&self) -> &Expr {
        &self.pattern_from
    }

    /// Returns the pattern that is rewritten to.
    pub fn pattern_to(&self) -> &Expr {
        &self.pattern_to
    }
}

/// Formats the rule as `from -> to`, with both patterns in prefix notation.
impl Display for Equivalence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern_from, self.pattern_to)
    }
}

/// Counts the sub-expressions matching a pattern, without changing anything.
struct CountMatches<'a> {
    pattern: &'a Expr,
    count: usize,
}

impl Rewriter for CountMatches<'_> {
    fn rewrite(&mut self, expr: &Expr) -> Expr {
        if self.pattern.matches(expr, &mut MatchSubstitutions::new()) {
            trace!("match {}: `{}` matches `{}`", self.count, expr, self.pattern);
            self.count += 1;
        }
        walk(self, expr)
    }
}

/// Replaces the match with the given index by the filled-in replacement of a rule.
struct ApplyAt<'a> {
    equivalence: &'a Equivalence,
    target: usize,

    /// The index of the next match.
    next: usize,
    found: bool,
}

impl Rewriter for ApplyAt<'_> {
    fn rewrite(&mut self, expr: &Expr) -> Expr {
        if !self.found {
            let mut ctx = MatchSubstitutions::new();
            if self.equivalence.pattern_from.matches(expr, &mut ctx) {
                trace!("match {}: `{}` matches `{}`", self.next, expr, self.equivalence.pattern_from);
                if self.next == self.target {
                    self.found = true;
                    return Substitute { ctx: &ctx }.rewrite(&self.equivalence.pattern_to);
                }
                self.next += 1;
            }
        }
        walk(self, expr)
    }
}

/// Fills in the placeholders of a replacement with the expressions they were bound to.
///
/// A placeholder is filled in with its first binding, which is a sub-expression of the rewritten
/// expression and so already uses its variables. Later occurrences were only checked to be
/// alpha-equal to it, and their variables are not carried over.
struct Substitute<'a> {
    ctx: &'a MatchSubstitutions,
}

impl Rewriter for Substitute<'_> {
    fn rewrite_placeholder(&mut self, name: &VariableName) -> Expr {
        match self.ctx.binding(name) {
            Some(bound) => bound.clone(),
            None => Expr::Placeholder(name.clone()),
        }
    }
}

impl PatternBasedRewriter for Equivalence {
    fn matches(&self, expr: &Expr) -> usize {
        let mut counter = CountMatches { pattern: &self.pattern_from, count: 0 };
        let rewritten = counter.rewrite(expr);
        debug_assert_eq!(&rewritten, expr);
        counter.count
    }

    fn apply_with(&self, expr: &Expr, index: usize, names: &mut NameGenerator) -> Result<Expr, Error> {
        let mut apply = ApplyAt { equivalence: self, target: index, next: 0, found: false };
        let rewritten = apply.rewrite(expr);
        if !apply.found {
            return Err(Error::new(
                vec![expr.prefix_spans().full_span()],
                MatchIndexOutOfRange { index, matches: apply.next },
            ));
        }

        let result = refresh_all_variables_with(&rewritten, names);
        debug!("applied `{}` at match {} of `{}`: `{}`", self, index, expr, result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use alg_error::Error;
    use crate::{expr::ZERO, name::FunctionName};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use super::*;

    fn var(label: &str) -> Expr {
        Expr::Variable(VariableName::labeled(label))
    }

    fn placeholder(label: &str) -> Expr {
        Expr::Placeholder(VariableName::labeled(label))
    }

    /// Renders an error report against the given source, without colors.
    fn render(err: &Error, source: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("expr")
            .write(("expr", ariadne::Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test_log::test]
    fn a_minus_a_cancels() {
        let a = var("a");
        let b = var("b");
        let c = a + b;

        // (a + b) + (-(a + b))
        let expr = c.clone() + -c;
        let rule = Identity::AMinusA.equivalence();
        assert_eq!(rule.matches(&expr), 1);
        assert_eq!(rule.apply(&expr, 0).unwrap(), *ZERO);
    }

    #[test]
    fn repeated_placeholder_only_matches_inner_sum() {
        let x = placeholder("x");
        let rule = Equivalence::new(x.clone() + x.clone(), x.clone() * Expr::constant(2.0)).unwrap();

        let a = var("a");
        let b = var("b");

        // a + (b + a)
        let expr = a.clone() + (b.clone() + a.clone());
        assert!(!rule.pattern_from().matches(&expr, &mut MatchSubstitutions::new()));

        // two lone variables are alpha-equal, so `b + a` itself matches
        assert_eq!(rule.matches(&expr), 1);
        assert_eq!(rule.apply(&expr, 0).unwrap(), a.clone() + b.clone() * Expr::constant(2.0));
    }

    #[test_log::test]
    fn commutativity_at_inner_match() {
        let a = var("a");
        let b = var("b");

        // a + (b + a)
        let expr = a.clone() + (b.clone() + a.clone());
        let rule = Identity::AdditionCommutativity.equivalence();
        assert_eq!(rule.matches(&expr), 2);

        let rewritten = rule.apply(&expr, 1).unwrap();
        assert_eq!(rewritten, a.clone() + (a.clone() + b.clone()));
        assert_ne!(rewritten, a.clone() + (b.clone() + a.clone()));

        // the outer match swaps the whole tree
        let rewritten = rule.apply(&expr, 0).unwrap();
        assert_eq!(rewritten, (b.clone() + a.clone()) + a);
    }

    #[test]
    fn result_has_fresh_variables() {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("b");
        let expr = Expr::variable(&a) * Expr::variable(&b);
        let rule = Identity::MultiplicationCommutativity.equivalence();

        let mut names = NameGenerator::with_prefixes("t", "g");
        let rewritten = rule.apply_with(&expr, 0, &mut names).unwrap();
        assert_eq!(rewritten.to_string(), "(* t1 t2)");

        let before = HashSet::from([a, b]);
        assert!(rewritten.variables().iter().all(|name| !before.contains(name)));
    }

    #[test]
    fn every_index_below_count_applies() {
        let a = var("a");
        let b = var("b");
        let f = FunctionName::labeled("f");
        let exprs = [
            a.clone() + (a.clone() + a.clone()),
            (a.clone() * b.clone()) * (Expr::constant(1.0) * (a.clone() * Expr::constant(0.0))),
            Expr::call(&f, vec![a.clone() + -a.clone(), Expr::constant(0.0) + b.clone()]).cos(),
            (a.clone() + b.clone()).ln() + (b.clone() + a.clone()),
        ];

        for identity in Identity::ALL {
            let rule = identity.equivalence();
            for expr in &exprs {
                let count = rule.matches(expr);
                for index in 0..count {
                    assert!(rule.apply(expr, index).is_ok(), "{} at {} of {}", identity, index, expr);
                }

                let err = rule.apply(expr, count).unwrap_err();
                let kind = err.kind_as::<MatchIndexOutOfRange>().unwrap();
                assert_eq!(kind, &MatchIndexOutOfRange { index: count, matches: count });
            }
        }
    }

    #[test]
    fn out_of_range_report() {
        let a = var("a");
        let expr = a.clone() * a.clone();
        let rule = Identity::AdditionCommutativity.equivalence();

        let err = rule.apply(&expr, 0).unwrap_err();
        assert_eq!(err.spans, vec![0..7]);
        let report = render(&err, &expr.to_prefix_notation());
        assert!(report.contains("there is no match at index 0"));
        assert!(report.contains("the pattern does not match anywhere in this expression"));
    }

    #[test]
    fn swapped_variables_stay_distinct() {
        // x * x -> x, where the second `x` matches with `a` and `b` swapped
        let x = placeholder("x");
        let rule = Equivalence::new(x.clone() * x.clone(), x.clone()).unwrap();

        let a = var("a");
        let b = var("b");
        let expr = (a.clone() + -b.clone()) * (b.clone() + -a.clone());
        assert_eq!(rule.matches(&expr), 1);
        assert_eq!(rule.apply(&expr, 0).unwrap(), a + -b);
    }

    #[test]
    fn chained_alignment_keeps_variables_apart() {
        // x * x -> x, where the second `x` lines up `a` with `c` and `c` with `d`
        let x = placeholder("x");
        let rule = Equivalence::new(x.clone() * x.clone(), x.clone()).unwrap();

        let a = var("a");
        let c = var("c");
        let d = var("d");
        let expr = (a.clone() + c.clone()) * (c.clone() + d.clone());
        assert_eq!(rule.matches(&expr), 1);

        let mut names = NameGenerator::with_prefixes("t", "g");
        let rewritten = rule.apply_with(&expr, 0, &mut names).unwrap();
        assert_eq!(rewritten.to_string(), "(+ t1 t2)");
        assert_eq!(rewritten, a.clone() + c.clone());
        assert_ne!(rewritten, a.clone() + a);
    }

    #[test]
    fn free_variable_is_rejected() {
        let x = placeholder("x");
        let v = var("v");
        let err = Equivalence::new(x.clone() + v.clone(), x.clone()).unwrap_err();
        assert_eq!(
            err.kind_as::<FreeVariableInPattern>(),
            Some(&FreeVariableInPattern { name: "v".to_string() }),
        );

        // (+ x v)
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn unbound_placeholder_is_rejected() {
        let x = placeholder("x");
        let y = placeholder("y");
        let err = Equivalence::new(x.clone().cos(), x.clone() * y.clone()).unwrap_err();
        assert_eq!(
            err.kind_as::<UnboundPlaceholder>(),
            Some(&UnboundPlaceholder { name: "y".to_string() }),
        );

        // (* x y)
        assert_eq!(err.spans, vec![5..6]);
        let report = render(&err, &(x * y).to_prefix_notation());
        assert!(report.contains("the placeholder `y` is never bound"));
    }

    #[test]
    fn display() {
        let x = placeholder("x");
        let rule = Equivalence::new(x.clone() * Expr::constant(1.0), x).unwrap();
        assert_eq!(rule.to_string(), "(* x 1) -> x");
    }
}
