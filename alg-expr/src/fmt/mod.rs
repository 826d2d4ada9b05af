//! Textual rendering of expressions.
//!
//! The main representation is **prefix notation**, where every composite node is written as
//! `(op p1 p2 ...)`, constants as their value, and variables as their label. For example, the
//! expression `a + (-b)` is rendered as `(+ a (- b))`. Prefix notation is also the text that
//! error reports point into; see [`PrefixSpans`].
//!
//! The [`mathml`] module renders expressions as MathML markup.

pub mod mathml;

use crate::expr::Expr;
use std::{fmt::{Display, Formatter, Result}, ops::Range};

pub use mathml::MathMl;

/// The location of a single node in the prefix notation of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeSpan {
    /// The region covering the whole node, including its parameters.
    whole: Range<usize>,

    /// The region covering the operator or function name of the node. For leaves, this is the
    /// same as `whole`.
    operator: Range<usize>,
}

/// The prefix notation of an expression, along with the location of every node in it.
///
/// Nodes are numbered in pre-order (a node comes before its parameters, and parameters are
/// numbered left to right), starting from `0` for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSpans {
    source: String,
    nodes: Vec<NodeSpan>,
}

impl PrefixSpans {
    /// Renders the given expression.
    pub fn new(expr: &Expr) -> Self {
        let mut spans = Self { source: String::new(), nodes: Vec::new() };
        spans.write(expr);
        spans
    }

    fn write(&mut self, expr: &Expr) {
        let index = self.nodes.len();
        let start = self.source.len();
        self.nodes.push(NodeSpan { whole: start..start, operator: start..start });

        let operator = match expr {
            Expr::Constant(value) => {
                self.source.push_str(&value.to_string());
                start..self.source.len()
            },
            Expr::Variable(name) | Expr::Placeholder(name) => {
                self.source.push_str(name.label());
                start..self.source.len()
            },
            Expr::Binary(..) | Expr::Unary(..) | Expr::Call(..) => {
                let symbol = match expr {
                    Expr::Binary(kind, ..) => kind.symbol(),
                    Expr::Unary(kind, _) => kind.symbol(),
                    Expr::Call(name, _) => name.label(),
                    _ => unreachable!(),
                };
                self.source.push('(');
                let operator_start = self.source.len();
                self.source.push_str(symbol);
                let operator = operator_start..self.source.len();
                for param in expr.parameters() {
                    self.source.push(' ');
                    self.write(param);
                }
                self.source.push(')');
                operator
            },
        };

        self.nodes[index] = NodeSpan { whole: start..self.source.len(), operator };
    }

    /// Returns the prefix notation.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consumes `self` and returns the prefix notation.
    pub fn into_source(self) -> String {
        self.source
    }

    /// Returns the number of nodes in the rendered expression.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, as every expression has at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the region covered by the node with the given pre-order index.
    pub fn span(&self, node: usize) -> Range<usize> {
        self.nodes[node].whole.clone()
    }

    /// Returns the region covered by the operator or function name of the node with the given
    /// pre-order index.
    pub fn operator_span(&self, node: usize) -> Range<usize> {
        self.nodes[node].operator.clone()
    }

    /// Returns the region covered by the whole expression.
    pub fn full_span(&self) -> Range<usize> {
        0..self.source.len()
    }
}

impl Expr {
    /// Outputs the expression in prefix notation.
    pub fn to_prefix_notation(&self) -> String {
        PrefixSpans::new(self).into_source()
    }

    /// Outputs the expression in prefix notation, along with the location of every node in it.
    pub fn prefix_spans(&self) -> PrefixSpans {
        PrefixSpans::new(self)
    }
}

/// Formats the expression in prefix notation.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(PrefixSpans::new(self).source())
    }
}

#[cfg(test)]
mod tests {
    use crate::name::{FunctionName, VariableName};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn prefix_notation() {
        let a = Expr::Variable(VariableName::labeled("a"));
        let b = Expr::Variable(VariableName::labeled("b"));
        let f = FunctionName::labeled("f");

        let expr = a.clone() * a.clone() + -b.clone();
        assert_eq!(expr.to_prefix_notation(), "(+ (* a a) (- b))");

        let expr = Expr::call(&f, vec![a.clone().ln(), Expr::constant(2.5)]) / b.clone().cos();
        assert_eq!(expr.to_string(), "(/ (f (log a) 2.5) (cos b))");

        assert_eq!(Expr::call(&f, vec![]).to_string(), "(f)");
        assert_eq!(Expr::constant(0.0).pow(Expr::constant(-1.0)).to_string(), "(^ 0 -1)");
    }

    #[test]
    fn spans_in_pre_order() {
        let a = Expr::Variable(VariableName::labeled("a"));
        let bb = Expr::Variable(VariableName::labeled("bb"));

        // (+ a (- bb))
        let spans = (a + -bb).prefix_spans();
        assert_eq!(spans.source(), "(+ a (- bb))");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans.span(0), 0..12);
        assert_eq!(spans.operator_span(0), 1..2);
        assert_eq!(spans.span(1), 3..4);
        assert_eq!(spans.span(2), 5..11);
        assert_eq!(spans.operator_span(2), 6..7);
        assert_eq!(spans.span(3), 8..10);
        assert_eq!(spans.operator_span(3), 8..10);
    }
}
