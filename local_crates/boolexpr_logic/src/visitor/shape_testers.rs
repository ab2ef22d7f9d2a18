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

macro_rules! shape_tester_impl {
    ($doc:meta, $t:ident, $($disqualifier:ident),+) => {
        #[$doc]
        #[derive(Default)]
        pub struct $t {
            aborted: bool,
        }

        impl $t {
            /// Tests the given node.
            ///
            /// A single dispatch is made on the node, so only its kind is taken into account.
            pub fn test(&mut self, expr: &BoolExpr) -> bool {
                self.aborted = false;
                self.visit(expr);
                !self.aborted
            }

            fn abort(&mut self) {
                self.aborted = true
            }
        }

        impl Visitor for $t {
            $(
                fn $disqualifier(&mut self, _expr: &BoolExpr) {
                    self.abort()
                }
            )+

            fn is_aborted(&self) -> bool {
                self.aborted
            }
        }
    };
}

shape_tester_impl!(
    doc = "A tester that checks whether a node is a conjunction, i.e. neither a disjunction, an implication nor an equivalence.",
    ConjunctionTester,
    visit_or,
    visit_imp,
    visit_iff
);

shape_tester_impl!(
    doc = "A tester that checks whether a node is a disjunction, i.e. neither a conjunction, an implication nor an equivalence.",
    DisjunctionTester,
    visit_and,
    visit_imp,
    visit_iff
);
