use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression is the last visited expression. Compares addresses,
    /// since alpha-equal siblings are not the same node.
    fn is_last_visited(&self, expr: &Expr) -> bool {
        self.last_visited.map_or(false, |last| std::ptr::eq(last, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let params = expr.parameters();

            // leaves, and parents whose children have all been visited
            let done = match params.last() {
                None => true,
                Some(last) => self.is_last_visited(last),
            };
            if done {
                return self.visit();
            }
            self.stack.extend(params.into_iter().rev());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{expr::Expr, name::VariableName};
    use pretty_assertions::assert_eq;

    #[test]
    fn post_order() {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("b");

        // (a * b) + (-a)
        let expr = Expr::variable(&a) * Expr::variable(&b) + -Expr::variable(&a);
        let rendered = expr.post_order_iter()
            .map(|expr| expr.to_prefix_notation())
            .collect::<Vec<_>>();
        assert_eq!(rendered, vec![
            "a",
            "b",
            "(* a b)",
            "a",
            "(- a)",
            "(+ (* a b) (- a))",
        ]);
    }
}
