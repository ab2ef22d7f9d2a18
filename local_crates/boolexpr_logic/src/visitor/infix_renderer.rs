// boolexpr_logic
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use crate::{BoolExpr, Visitor};
use std::mem;

/// A renderer that writes formulas using the fully parenthesized infix notation.
///
/// Constants are written `1` and `0`, negations are prefixed by `!`,
/// and each binary operation is surrounded by parentheses with its operator (`&`, `|`, `=>`, `<=>`) between spaces.
/// The output of this renderer can be read back by the [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```
/// use boolexpr_logic::{InfixRenderer, Parser};
///
/// let formula = Parser::default().parse("1 & x | 0").unwrap();
/// assert_eq!("((1 & x) | 0)", InfixRenderer::default().render(&formula));
/// ```
#[derive(Default)]
pub struct InfixRenderer {
    buffer: String,
}

impl InfixRenderer {
    /// Renders the formula rooted by the given node.
    pub fn render(&mut self, expr: &BoolExpr) -> String {
        self.buffer.clear();
        self.visit(expr);
        mem::take(&mut self.buffer)
    }

    fn render_joined(&mut self, expr: &BoolExpr, operator: &str) {
        self.buffer.push('(');
        for (i, operand) in expr.operands().iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(operator);
            }
            self.visit(operand);
        }
        self.buffer.push(')');
    }

    fn render_binary(&mut self, expr: &BoolExpr, operator: &str) {
        self.buffer.push('(');
        self.visit(expr.left());
        self.buffer.push_str(operator);
        self.visit(expr.right());
        self.buffer.push(')');
    }
}

impl Visitor for InfixRenderer {
    fn visit_iff(&mut self, expr: &BoolExpr) {
        self.render_binary(expr, " <=> ")
    }

    fn visit_imp(&mut self, expr: &BoolExpr) {
        self.render_binary(expr, " => ")
    }

    fn visit_and(&mut self, expr: &BoolExpr) {
        self.render_joined(expr, " & ")
    }

    fn visit_or(&mut self, expr: &BoolExpr) {
        self.render_joined(expr, " | ")
    }

    fn visit_not(&mut self, expr: &BoolExpr) {
        self.buffer.push('!');
        self.visit(&expr.operands()[0]);
    }

    fn visit_var(&mut self, expr: &BoolExpr) {
        self.buffer.push_str(expr.name())
    }

    fn visit_true(&mut self, _expr: &BoolExpr) {
        self.buffer.push('1')
    }

    fn visit_false(&mut self, _expr: &BoolExpr) {
        self.buffer.push('0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoolExprKind;

    fn var(name: &str) -> BoolExpr {
        BoolExpr::new_var(name)
    }

    fn render(expr: &BoolExpr) -> String {
        InfixRenderer::default().render(expr)
    }

    #[test]
    fn test_leaves() {
        assert_eq!("1", render(&BoolExpr::new(BoolExprKind::True)));
        assert_eq!("0", render(&BoolExpr::new(BoolExprKind::False)));
        assert_eq!("x′", render(&var("x′")));
    }

    #[test]
    fn test_binary_operators() {
        for (kind, expected) in [
            (BoolExprKind::And, "(a & b)"),
            (BoolExprKind::Or, "(a | b)"),
            (BoolExprKind::Imp, "(a => b)"),
            (BoolExprKind::Iff, "(a <=> b)"),
        ]
        .iter()
        {
            let expr = BoolExpr::with_operands(*kind, vec![var("a"), var("b")]);
            assert_eq!(*expected, render(&expr));
        }
    }

    #[test]
    fn test_not_does_not_parenthesize_operand() {
        let not_var = BoolExpr::with_operands(BoolExprKind::Not, vec![var("a")]);
        assert_eq!("!a", render(&not_var));
        let not_not = BoolExpr::with_operands(BoolExprKind::Not, vec![not_var]);
        assert_eq!("!!a", render(&not_not));
        let not_and = BoolExpr::with_operands(
            BoolExprKind::Not,
            vec![BoolExpr::with_operands(
                BoolExprKind::And,
                vec![var("a"), var("b")],
            )],
        );
        assert_eq!("!(a & b)", render(&not_and));
    }

    #[test]
    fn test_n_ary_and_or() {
        let and = BoolExpr::with_operands(BoolExprKind::And, vec![var("a"), var("b"), var("c")]);
        assert_eq!("(a & b & c)", render(&and));
        let or = BoolExpr::with_operands(BoolExprKind::Or, vec![var("a")]);
        assert_eq!("(a)", render(&or));
    }

    #[test]
    fn test_nested() {
        let expr = BoolExpr::with_operands(
            BoolExprKind::Imp,
            vec![
                BoolExpr::with_operands(BoolExprKind::Or, vec![var("a"), var("b")]),
                BoolExpr::with_operands(
                    BoolExprKind::Iff,
                    vec![var("c"), BoolExpr::new(BoolExprKind::False)],
                ),
            ],
        );
        assert_eq!("((a | b) => (c <=> 0))", render(&expr));
    }

    #[test]
    fn test_renderer_is_reusable() {
        let mut renderer = InfixRenderer::default();
        assert_eq!("a", renderer.render(&var("a")));
        assert_eq!("b", renderer.render(&var("b")));
    }
}
