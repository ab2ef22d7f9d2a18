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

const DEFAULT_CLAUSE_SEPARATOR: &str = "\n";

/// A renderer that writes formulas in a clause-oriented style, close to the DIMACS format.
///
/// Variables are written by their names, negations are prefixed by `-`,
/// the operands of a disjunction are separated by a space and the operands of a conjunction are separated by a line feed.
/// Constants, implications and equivalences produce no output.
///
/// This renderer is intended for conjunctions of disjunctions (clauses) of literals,
/// but it does not check its input has this shape.
///
/// # Examples
///
/// ```
/// use boolexpr_logic::{ClauseRenderer, Parser};
///
/// let formula = Parser::default().parse("(a | !b) & c").unwrap();
/// assert_eq!("a -b\nc", ClauseRenderer::default().render(&formula));
/// ```
pub struct ClauseRenderer {
    buffer: String,
    clause_separator: String,
}

impl Default for ClauseRenderer {
    fn default() -> Self {
        ClauseRenderer {
            buffer: String::new(),
            clause_separator: DEFAULT_CLAUSE_SEPARATOR.to_string(),
        }
    }
}

impl ClauseRenderer {
    /// Sets the string written between the operands of conjunctions.
    ///
    /// By default, a single line feed is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_logic::{ClauseRenderer, Parser};
    ///
    /// let formula = Parser::default().parse("(a | !b) & c").unwrap();
    /// let mut renderer = ClauseRenderer::default();
    /// renderer.set_clause_separator(" 0\n");
    /// assert_eq!("a -b 0\nc", renderer.render(&formula));
    /// ```
    pub fn set_clause_separator<S>(&mut self, separator: S)
    where
        S: Into<String>,
    {
        self.clause_separator = separator.into()
    }

    /// Renders the formula rooted by the given node.
    pub fn render(&mut self, expr: &BoolExpr) -> String {
        self.buffer.clear();
        self.visit(expr);
        mem::take(&mut self.buffer)
    }

    fn render_joined(&mut self, expr: &BoolExpr, separator: &str) {
        for (i, operand) in expr.operands().iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(separator);
            }
            self.visit(operand);
        }
    }
}

impl Visitor for ClauseRenderer {
    fn visit_and(&mut self, expr: &BoolExpr) {
        let separator = self.clause_separator.clone();
        self.render_joined(expr, &separator)
    }

    fn visit_or(&mut self, expr: &BoolExpr) {
        self.render_joined(expr, " ")
    }

    fn visit_not(&mut self, expr: &BoolExpr) {
        self.buffer.push('-');
        self.visit(&expr.operands()[0]);
    }

    fn visit_var(&mut self, expr: &BoolExpr) {
        self.buffer.push_str(expr.name())
    }
}
