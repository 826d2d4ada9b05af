//! Renaming variables.

use crate::{
    expr::Expr,
    name::{with_default_names, NameGenerator, VariableName},
};
use super::Rewriter;

/// Replaces one variable name with another, in both variables and placeholders.
struct Rename<'a> {
    from: &'a VariableName,
    to: &'a VariableName,
}

impl Rename<'_> {
    fn name(&self, name: &VariableName) -> VariableName {
        if name == self.from {
            self.to.clone()
        } else {
            name.clone()
        }
    }
}

impl Rewriter for Rename<'_> {
    fn rewrite_variable(&mut self, name: &VariableName) -> Expr {
        Expr::Variable(self.name(name))
    }

    fn rewrite_placeholder(&mut self, name: &VariableName) -> Expr {
        Expr::Placeholder(self.name(name))
    }
}

/// Returns a copy of `expr` where every variable or placeholder named `from` is named `to`
/// instead. The kind of each node is kept, so a renamed placeholder is still a placeholder.
///
/// If `to` already occurs in `expr`, the two variables are merged.
pub fn rename_variable(expr: &Expr, from: &VariableName, to: &VariableName) -> Expr {
    Rename { from, to }.rewrite(expr)
}

/// Renames every variable and placeholder of `expr` to a fresh name from the default name
/// generator of the current thread.
///
/// The result is alpha-equal to `expr`, but shares no variable names with it.
pub fn refresh_all_variables(expr: &Expr) -> Expr {
    with_default_names(|names| refresh_all_variables_with(expr, names))
}

/// Renames every variable and placeholder of `expr` to a fresh name from the given generator.
///
/// The result is alpha-equal to `expr`, but shares no variable names with it.
pub fn refresh_all_variables_with(expr: &Expr, names: &mut NameGenerator) -> Expr {
    // renaming one at a time is fine, fresh names cannot collide with names not renamed yet
    expr.variables()
        .into_iter()
        .fold(expr.clone(), |expr, old| rename_variable(&expr, &old, &names.fresh_variable()))
}

#[cfg(test)]
mod tests {
    use crate::name::reset_default_names;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use super::*;

    fn sample() -> (Expr, VariableName, VariableName) {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("b");

        // (a * b) + log(a)
        let expr = Expr::variable(&a) * Expr::variable(&b) + Expr::variable(&a).ln();
        (expr, a, b)
    }

    #[test]
    fn rename_replaces_every_occurrence() {
        let (expr, a, b) = sample();
        let c = VariableName::labeled("c");
        let renamed = rename_variable(&expr, &a, &c);
        assert_eq!(renamed.to_string(), "(+ (* c b) (log c))");
        assert_eq!(renamed.variables(), vec![c, b]);
    }

    #[test]
    fn rename_keeps_placeholders() {
        let p = VariableName::labeled("p");
        let q = VariableName::labeled("q");
        let expr = Expr::Placeholder(p.clone()) + Expr::constant(1.0);
        let renamed = rename_variable(&expr, &p, &q);
        assert!(matches!(&renamed, Expr::Binary(_, lhs, _) if lhs.is_placeholder()));
        assert_eq!(renamed.variables(), vec![q]);
    }

    #[test]
    fn rename_back_and_forth() {
        let (expr, a, _) = sample();
        let y = VariableName::labeled("y");
        let there = rename_variable(&expr, &a, &y);
        let back = rename_variable(&there, &y, &a);
        assert_eq!(back, expr);
        assert_eq!(back.variables(), expr.variables());
    }

    #[test]
    fn refresh_is_alpha_equal_and_disjoint() {
        let (expr, _, _) = sample();
        let refreshed = refresh_all_variables(&expr);
        assert_eq!(refreshed, expr);

        let before = expr.variables().into_iter().collect::<HashSet<_>>();
        let after = refreshed.variables().into_iter().collect::<HashSet<_>>();
        assert_eq!(after.len(), 2);
        assert!(before.is_disjoint(&after));
    }

    #[test]
    fn refresh_labels_come_from_generator() {
        let (expr, _, _) = sample();
        let mut names = NameGenerator::with_prefixes("v", "g");
        let refreshed = refresh_all_variables_with(&expr, &mut names);
        assert_eq!(refreshed.to_string(), "(+ (* v1 v2) (log v1))");

        reset_default_names();
        let refreshed = refresh_all_variables(&expr);
        assert_eq!(refreshed.to_string(), "(+ (* x1 x2) (log x1))");
    }
}
