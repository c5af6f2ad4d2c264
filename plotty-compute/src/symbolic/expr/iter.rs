use super::Expr;

/// An iterator that traverses the tree of expressions in left-to-right post-order (i.e.
/// depth-first), including the arguments of function calls and the branches of piecewise
/// expressions.
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Expressions left to visit, paired with whether their children have already been pushed.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self { stack: vec![(expr, false)] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }

            self.stack.push((expr, true));
            for arg in expr.args().into_iter().rev() {
                self.stack.push((arg, false));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        let expr = Expr::Add(vec![
            Expr::Mul(vec![Expr::symbol("a"), Expr::call("sin", vec![Expr::symbol("x")])]),
            Expr::symbol("c"),
        ]);
        let visited = expr.post_order_iter()
            .map(|expr| match expr {
                Expr::Add(_) => "+".to_string(),
                Expr::Mul(_) => "*".to_string(),
                Expr::Primary(primary) => primary.to_string(),
                _ => unreachable!(),
            })
            .collect::<Vec<_>>();
        assert_eq!(visited, vec!["a", "x", "sin(x)", "*", "c", "+"]);
    }
}
