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

use crate::{BoolExpr, BoolExprKind};

/// A trait for operations that walk formulas.
///
/// A call to [`visit`](Self::visit) performs a single dispatch on the kind of the node,
/// calling exactly one of the eight `visit_*` handlers.
/// All the handlers do nothing by default; implementations override only the ones they need.
/// Handlers are responsible for visiting the operands of the node they receive, if required,
/// by calling [`visit`](Self::visit) on them.
///
/// Implementations may abort a walk by making [`is_aborted`](Self::is_aborted) return `true`;
/// the operation which initiated the walk reads this flag to get its result.
///
/// # Examples
///
/// ```
/// use boolexpr_logic::{BoolExpr, Parser, Visitor};
///
/// #[derive(Default)]
/// struct NegationCounter(usize);
///
/// impl Visitor for NegationCounter {
///     fn visit_not(&mut self, expr: &BoolExpr) {
///         self.0 += 1;
///         self.visit(&expr.operands()[0]);
///     }
/// }
///
/// let mut counter = NegationCounter::default();
/// counter.visit(&Parser::default().parse("!!x & !y").unwrap());
/// assert_eq!(0, counter.0);
/// counter.visit(&Parser::default().parse("!!x").unwrap());
/// assert_eq!(2, counter.0);
/// ```
pub trait Visitor {
    /// Calls the handler dedicated to the kind of the given node.
    fn visit(&mut self, expr: &BoolExpr) {
        match expr.kind() {
            BoolExprKind::Iff => self.visit_iff(expr),
            BoolExprKind::Imp => self.visit_imp(expr),
            BoolExprKind::And => self.visit_and(expr),
            BoolExprKind::Or => self.visit_or(expr),
            BoolExprKind::Not => self.visit_not(expr),
            BoolExprKind::Var => self.visit_var(expr),
            BoolExprKind::True => self.visit_true(expr),
            BoolExprKind::False => self.visit_false(expr),
        }
    }

    /// Handler for equivalence nodes.
    fn visit_iff(&mut self, _expr: &BoolExpr) {}

    /// Handler for implication nodes.
    fn visit_imp(&mut self, _expr: &BoolExpr) {}

    /// Handler for conjunction nodes.
    fn visit_and(&mut self, _expr: &BoolExpr) {}

    /// Handler for disjunction nodes.
    fn visit_or(&mut self, _expr: &BoolExpr) {}

    /// Handler for negation nodes.
    fn visit_not(&mut self, _expr: &BoolExpr) {}

    /// Handler for variable nodes.
    fn visit_var(&mut self, _expr: &BoolExpr) {}

    /// Handler for the `true` constant.
    fn visit_true(&mut self, _expr: &BoolExpr) {}

    /// Handler for the `false` constant.
    fn visit_false(&mut self, _expr: &BoolExpr) {}

    /// Returns `true` if a handler asked to stop the walk.
    fn is_aborted(&self) -> bool {
        false
    }
}

/// Visits each node of a formula, parents before their operands and operands in document order.
///
/// Each node is given to [`Visitor::visit`] once; handlers should not recurse themselves.
/// The walk stops as soon as the visitor reports it is aborted.
/// Returns `true` if the walk was aborted.
pub fn traverse_dfs_preorder<V>(visitor: &mut V, expr: &BoolExpr) -> bool
where
    V: Visitor + ?Sized,
{
    let mut stack = vec![expr];
    while let Some(current) = stack.pop() {
        visitor.visit(current);
        if visitor.is_aborted() {
            return true;
        }
        stack.extend(current.operands().iter().rev());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct KindRecorder {
        kinds: Vec<String>,
        abort_on_or: bool,
        aborted: bool,
    }

    impl KindRecorder {
        fn record(&mut self, label: &str) {
            self.kinds.push(label.to_string())
        }
    }

    impl Visitor for KindRecorder {
        fn visit_iff(&mut self, _expr: &BoolExpr) {
            self.record("iff")
        }

        fn visit_imp(&mut self, _expr: &BoolExpr) {
            self.record("imp")
        }

        fn visit_and(&mut self, _expr: &BoolExpr) {
            self.record("and")
        }

        fn visit_or(&mut self, _expr: &BoolExpr) {
            self.record("or");
            if self.abort_on_or {
                self.aborted = true;
            }
        }

        fn visit_not(&mut self, _expr: &BoolExpr) {
            self.record("not")
        }

        fn visit_var(&mut self, expr: &BoolExpr) {
            self.record(expr.name())
        }

        fn visit_true(&mut self, _expr: &BoolExpr) {
            self.record("1")
        }

        fn visit_false(&mut self, _expr: &BoolExpr) {
            self.record("0")
        }

        fn is_aborted(&self) -> bool {
            self.aborted
        }
    }

    fn sample() -> BoolExpr {
        // ((a & !b) | 1) <=> (0 => c)
        BoolExpr::with_operands(
            BoolExprKind::Iff,
            vec![
                BoolExpr::with_operands(
                    BoolExprKind::Or,
                    vec![
                        BoolExpr::with_operands(
                            BoolExprKind::And,
                            vec![
                                BoolExpr::new_var("a"),
                                BoolExpr::with_operands(
                                    BoolExprKind::Not,
                                    vec![BoolExpr::new_var("b")],
                                ),
                            ],
                        ),
                        BoolExpr::new(BoolExprKind::True),
                    ],
                ),
                BoolExpr::with_operands(
                    BoolExprKind::Imp,
                    vec![BoolExpr::new(BoolExprKind::False), BoolExpr::new_var("c")],
                ),
            ],
        )
    }

    #[test]
    fn test_visit_is_a_single_dispatch() {
        let mut recorder = KindRecorder::default();
        recorder.visit(&sample());
        assert_eq!(vec!["iff"], recorder.kinds);
    }

    #[test]
    fn test_default_handlers_do_nothing() {
        struct Nothing;
        impl Visitor for Nothing {}
        let mut nothing = Nothing;
        nothing.visit(&sample());
        assert!(!nothing.is_aborted());
        assert!(!traverse_dfs_preorder(&mut nothing, &sample()));
    }

    #[test]
    fn test_traverse_dfs_preorder() {
        let mut recorder = KindRecorder::default();
        assert!(!traverse_dfs_preorder(&mut recorder, &sample()));
        assert_eq!(
            vec!["iff", "or", "and", "a", "not", "b", "1", "imp", "0", "c"],
            recorder.kinds
        );
    }

    #[test]
    fn test_traverse_dfs_preorder_abort() {
        let mut recorder = KindRecorder {
            abort_on_or: true,
            ..Default::default()
        };
        assert!(traverse_dfs_preorder(&mut recorder, &sample()));
        assert_eq!(vec!["iff", "or"], recorder.kinds);
    }
}
