//! A generic, overridable tree transformer.
//!
//! A [`Rewriter`] rebuilds an expression bottom-up. Every node kind has a hook with a default
//! implementation: leaves are returned unchanged, and composite nodes rewrite their parameters
//! left to right and rebuild a node of the same kind from the results. A concrete rewrite only
//! overrides the hooks it cares about:
//!
//! ```
//! use alg_expr::{expr::Expr, name::VariableName, rewrite::Rewriter};
//!
//! /// Replaces every constant with its double.
//! struct Double;
//!
//! impl Rewriter for Double {
//!     fn rewrite_constant(&mut self, value: f64) -> Expr {
//!         Expr::constant(value * 2.0)
//!     }
//! }
//!
//! let x = VariableName::labeled("x");
//! let expr = Expr::constant(1.5) + Expr::variable(&x);
//! assert_eq!(Double.rewrite(&expr).to_string(), "(+ 3 x)");
//! ```
//!
//! Overriding [`Rewriter::rewrite`] itself intercepts every subtree before it is dispatched to the
//! per-kind hooks. Call [`walk`] from the override to continue with the default dispatch.
//!
//! The input tree is never modified; every rewrite returns a new tree.

pub mod rename;

use crate::{
    expr::{BinaryOpKind, Expr, UnaryOpKind},
    name::{FunctionName, VariableName},
};

pub use rename::{refresh_all_variables, refresh_all_variables_with, rename_variable};

/// A bottom-up tree transformer with one hook per node kind.
///
/// See the [module-level documentation](self) for more information.
pub trait Rewriter {
    /// Rewrites the given expression. By default, this dispatches to the hook matching the kind
    /// of the node through [`walk`].
    fn rewrite(&mut self, expr: &Expr) -> Expr {
        walk(self, expr)
    }

    fn rewrite_constant(&mut self, value: f64) -> Expr {
        Expr::Constant(value)
    }

    fn rewrite_variable(&mut self, name: &VariableName) -> Expr {
        Expr::Variable(name.clone())
    }

    /// Rewrites a placeholder. Placeholders have their own hook, so that overriding
    /// [`Rewriter::rewrite_variable`] leaves them untouched.
    fn rewrite_placeholder(&mut self, name: &VariableName) -> Expr {
        Expr::Placeholder(name.clone())
    }

    fn rewrite_binary(&mut self, kind: BinaryOpKind, lhs: &Expr, rhs: &Expr) -> Expr {
        let lhs = self.rewrite(lhs);
        let rhs = self.rewrite(rhs);
        Expr::binary(kind, lhs, rhs)
    }

    fn rewrite_unary(&mut self, kind: UnaryOpKind, operand: &Expr) -> Expr {
        let operand = self.rewrite(operand);
        Expr::unary(kind, operand)
    }

    fn rewrite_call(&mut self, function: &FunctionName, args: &[Expr]) -> Expr {
        let args = args.iter()
            .map(|arg| self.rewrite(arg))
            .collect();
        Expr::Call(function.clone(), args)
    }
}

/// Dispatches the given expression to the hook of `rewriter` matching its kind.
pub fn walk<R: Rewriter + ?Sized>(rewriter: &mut R, expr: &Expr) -> Expr {
    match expr {
        Expr::Constant(value) => rewriter.rewrite_constant(*value),
        Expr::Variable(name) => rewriter.rewrite_variable(name),
        Expr::Placeholder(name) => rewriter.rewrite_placeholder(name),
        Expr::Binary(kind, lhs, rhs) => rewriter.rewrite_binary(*kind, lhs, rhs),
        Expr::Unary(kind, operand) => rewriter.rewrite_unary(*kind, operand),
        Expr::Call(function, args) => rewriter.rewrite_call(function, args),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Records the prefix notation of every node it visits.
    #[derive(Default)]
    struct Trace(Vec<String>);

    impl Rewriter for Trace {
        fn rewrite(&mut self, expr: &Expr) -> Expr {
            let rewritten = walk(self, expr);
            self.0.push(rewritten.to_string());
            rewritten
        }
    }

    /// Replaces variables with `0`.
    struct ZeroVariables;

    impl Rewriter for ZeroVariables {
        fn rewrite_variable(&mut self, _: &VariableName) -> Expr {
            Expr::constant(0.0)
        }
    }

    #[test]
    fn identity_by_default() {
        struct Nothing;
        impl Rewriter for Nothing {}

        let a = VariableName::labeled("a");
        let f = FunctionName::labeled("f");
        let expr = Expr::call(&f, vec![Expr::variable(&a).ln(), Expr::placeholder()])
            / Expr::constant(2.0).pow(-Expr::variable(&a));
        let rewritten = Nothing.rewrite(&expr);
        assert_eq!(rewritten, expr);
        assert_eq!(rewritten.to_string(), expr.to_string());
    }

    #[test]
    fn visits_every_node_once_post_order() {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("b");
        let f = FunctionName::labeled("f");

        // f(a, b * 2)
        let expr = Expr::call(&f, vec![
            Expr::variable(&a),
            Expr::variable(&b) * Expr::constant(2.0),
        ]);
        let mut trace = Trace::default();
        trace.rewrite(&expr);
        assert_eq!(trace.0, vec![
            "a",
            "b",
            "2",
            "(* b 2)",
            "(f a (* b 2))",
        ]);
    }

    #[test]
    fn placeholders_have_their_own_hook() {
        let a = VariableName::labeled("a");
        let p = Expr::placeholder();
        let expr = Expr::variable(&a) + p.clone();
        let rewritten = ZeroVariables.rewrite(&expr);
        assert_eq!(rewritten, Expr::constant(0.0) + p);
    }
}
