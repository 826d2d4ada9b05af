//! Numerical evaluation of expressions.
//!
//! Addition, multiplication and negation are evaluated with the operations of
//! [`FieldElement`](crate::value::FieldElement), so they work for every kind of [`Value`].
//! Division is defined for real and complex numbers. Exponentiation, logarithms and cosines are
//! only defined for real numbers.
//!
//! Both operands of a binary operation must have the same representation; see [`Value`].

mod binary;
mod call;
mod unary;

use alg_error::ErrorKind;
use alg_expr::{fmt::PrefixSpans, Expr};
use crate::{
    ctxt::Ctxt,
    error::{kind::{MissingBinding, PlaceholderNotEvaluable}, Error},
    value::Value,
};
use log::trace;

/// A node of the evaluated expression, identified by its index in pre-order.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Node {
    /// The whole node.
    Whole(usize),

    /// Only the operator or function name of the node.
    Operator(usize),
}

/// An error that occurred during evaluation, pointing at nodes of the expression. It is converted
/// to an [`Error`] with spans once evaluation has stopped.
#[derive(Debug)]
pub(crate) struct EvalError {
    nodes: Vec<Node>,
    kind: Box<dyn ErrorKind>,
}

impl EvalError {
    pub(crate) fn new(nodes: Vec<Node>, kind: impl ErrorKind + 'static) -> Self {
        Self { nodes, kind: Box::new(kind) }
    }

    /// Converts the error into an [`Error`] pointing into the given rendering of the expression.
    fn into_error(self, spans: &PrefixSpans) -> Error {
        let spans = self.nodes
            .into_iter()
            .map(|node| match node {
                Node::Whole(index) => spans.span(index),
                Node::Operator(index) => spans.operator_span(index),
            })
            .collect();
        Error { spans, kind: self.kind }
    }
}

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error> {
        Evaluator { ctxt, next: 0 }
            .eval(self)
            .map_err(|err| err.into_error(&self.prefix_spans()))
    }
}

/// Evaluates the expression using the given context.
///
/// The spans of a returned error point into the prefix notation of `expr`.
pub fn eval(expr: &Expr, ctxt: &Ctxt) -> Result<Value, Error> {
    expr.eval(ctxt)
}

/// Evaluates the nodes of an expression, numbering them in pre-order as they are visited.
pub(crate) struct Evaluator<'a> {
    ctxt: &'a Ctxt,

    /// The index of the next node to visit.
    next: usize,
}

impl Evaluator<'_> {
    fn eval(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        let node = self.next;
        self.next += 1;

        match expr {
            Expr::Constant(n) => Ok(self.ctxt.precision.value(*n)),
            Expr::Variable(name) => self.ctxt.get_var(name).ok_or_else(|| {
                trace!("no value for `{}`", name);
                EvalError::new(vec![Node::Whole(node)], MissingBinding {
                    name: name.label().to_string(),
                    suggestions: self.ctxt.similar_vars(name.label())
                        .into_iter()
                        .map(|name| name.label().to_string())
                        .collect(),
                })
            }),
            Expr::Placeholder(name) => Err(EvalError::new(vec![Node::Whole(node)], PlaceholderNotEvaluable {
                name: name.label().to_string(),
            })),
            Expr::Binary(op, lhs, rhs) => {
                let left = self.eval(lhs)?;
                let rhs_node = self.next;
                let right = self.eval(rhs)?;
                binary::eval_operands(*op, left, right).map_err(|kind| EvalError {
                    nodes: vec![Node::Whole(node + 1), Node::Operator(node), Node::Whole(rhs_node)],
                    kind,
                })
            },
            Expr::Unary(op, operand) => {
                let value = self.eval(operand)?;
                unary::eval_operand(*op, value, self.ctxt.trig_mode).map_err(|kind| EvalError {
                    nodes: vec![Node::Whole(node + 1), Node::Operator(node)],
                    kind,
                })
            },
            Expr::Call(name, args) => self.eval_call(node, name, args),
        }
    }
}
