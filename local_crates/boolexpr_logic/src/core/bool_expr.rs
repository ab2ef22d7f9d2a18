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

use crate::visitor::{
    ClauseRenderer, ConjunctionTester, DisjunctionTester, InfixRenderer, VarCollector,
};
use std::fmt::Display;

/// An enum for the eight kinds of nodes a propositional formula is made of.
///
/// See [`BoolExpr`] for more information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoolExprKind {
    /// An equivalence node (`<=>`)
    Iff,
    /// An implication node (`=>`)
    Imp,
    /// A conjunction node (`&`)
    And,
    /// A disjunction node (`|`)
    Or,
    /// A negation node (`!`)
    Not,
    /// A variable node
    Var,
    /// The `true` constant (`1`)
    True,
    /// The `false` constant (`0`)
    False,
}

impl BoolExprKind {
    /// Returns the number of operands a node of this kind is expected to own.
    ///
    /// Conjunctions and disjunctions built by hand may own more operands than this value;
    /// the parser always produces exactly this number of operands.
    pub fn arity(&self) -> usize {
        match self {
            BoolExprKind::Iff | BoolExprKind::Imp | BoolExprKind::And | BoolExprKind::Or => 2,
            BoolExprKind::Not => 1,
            BoolExprKind::Var | BoolExprKind::True | BoolExprKind::False => 0,
        }
    }
}

/// A node of a propositional formula abstract syntax tree.
///
/// A node is made of a kind, a name (only meaningful for variables) and an ordered sequence of operands.
/// Each node owns its operands; the whole tree is owned by the holder of the root node.
///
/// Nodes are usually built by the [`Parser`](crate::Parser),
/// but they can also be built by hand with [`new`](Self::new), [`new_var`](Self::new_var) and [`with_operands`](Self::with_operands).
/// No check is made on the number of operands: respecting the arity of each kind is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolExpr {
    kind: BoolExprKind,
    name: String,
    operands: Vec<BoolExpr>,
}

impl BoolExpr {
    /// Builds a new node of the given kind, with an empty name and no operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_logic::{BoolExpr, BoolExprKind};
    ///
    /// let t = BoolExpr::new(BoolExprKind::True);
    /// assert_eq!(BoolExprKind::True, t.kind());
    /// assert!(!t.has_operands());
    /// ```
    pub fn new(kind: BoolExprKind) -> Self {
        BoolExpr {
            kind,
            name: String::new(),
            operands: Vec::new(),
        }
    }

    /// Builds a new variable node, given its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_logic::{BoolExpr, BoolExprKind};
    ///
    /// let x = BoolExpr::new_var("x");
    /// assert_eq!(BoolExprKind::Var, x.kind());
    /// assert_eq!("x", x.name());
    /// ```
    pub fn new_var<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        BoolExpr {
            kind: BoolExprKind::Var,
            name: name.into(),
            operands: Vec::new(),
        }
    }

    /// Builds a new node of the given kind, given its operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_logic::{BoolExpr, BoolExprKind};
    ///
    /// let and = BoolExpr::with_operands(
    ///     BoolExprKind::And,
    ///     vec![BoolExpr::new_var("x"), BoolExpr::new(BoolExprKind::False)],
    /// );
    /// assert_eq!("(x & 0)", format!("{}", and));
    /// ```
    pub fn with_operands(kind: BoolExprKind, operands: Vec<BoolExpr>) -> Self {
        BoolExpr {
            kind,
            name: String::new(),
            operands,
        }
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> BoolExprKind {
        self.kind
    }

    /// Returns the name of this node.
    ///
    /// The name is empty for all nodes but variables.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the operands of this node, in document order.
    pub fn operands(&self) -> &[BoolExpr] {
        &self.operands
    }

    /// Returns `true` if this node has at least one operand.
    pub fn has_operands(&self) -> bool {
        !self.operands.is_empty()
    }

    /// Appends an operand to this node.
    pub fn add_operand(&mut self, operand: BoolExpr) {
        self.operands.push(operand)
    }

    /// Returns the left-hand side operand of a binary node.
    ///
    /// # Panics
    ///
    /// Panics if this node has less than two operands.
    pub fn left(&self) -> &BoolExpr {
        self.binary_operand(0)
    }

    /// Returns the right-hand side operand of a binary node.
    ///
    /// # Panics
    ///
    /// Panics if this node has less than two operands.
    pub fn right(&self) -> &BoolExpr {
        self.binary_operand(1)
    }

    fn binary_operand(&self, index: usize) -> &BoolExpr {
        if self.operands.len() < 2 {
            panic!(
                "expected a binary node, found a {:?} node with {} operand(s)",
                self.kind,
                self.operands.len()
            )
        }
        &self.operands[index]
    }

    /// Returns `true` if this node is a conjunction.
    ///
    /// Only the kind of this node is considered: its operands are never inspected.
    /// As a consequence, any node which is not a disjunction, an implication or an equivalence is considered as a conjunction.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_logic::Parser;
    ///
    /// let parser = Parser::default();
    /// assert!(parser.parse("x & (y | z)").unwrap().is_conjunction());
    /// assert!(!parser.parse("(x & y) | z").unwrap().is_conjunction());
    /// ```
    pub fn is_conjunction(&self) -> bool {
        ConjunctionTester::default().test(self)
    }

    /// Returns `true` if this node is a disjunction.
    ///
    /// Only the kind of this node is considered: its operands are never inspected.
    /// As a consequence, any node which is not a conjunction, an implication or an equivalence is considered as a disjunction.
    pub fn is_disjunction(&self) -> bool {
        DisjunctionTester::default().test(self)
    }

    /// Returns the clause-style rendering of the formula rooted by this node.
    ///
    /// See [`ClauseRenderer`] for more information.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_logic::Parser;
    ///
    /// let formula = Parser::default().parse("x & (!x | y)").unwrap();
    /// assert_eq!("x\n-x y", formula.to_sat_string());
    /// ```
    pub fn to_sat_string(&self) -> String {
        ClauseRenderer::default().render(self)
    }

    /// Returns the names of the variables that appear in the formula rooted by this node.
    ///
    /// The names are sorted and each of them appears once.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_logic::Parser;
    ///
    /// let formula = Parser::default().parse("(y | x) & !y => z").unwrap();
    /// assert_eq!(vec!["x", "y", "z"], formula.vars());
    /// ```
    pub fn vars(&self) -> Vec<String> {
        let mut with_dups = VarCollector::default().collect(self);
        with_dups.sort_unstable();
        with_dups.dedup();
        with_dups
    }
}

impl Display for BoolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", InfixRenderer::default().render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> BoolExpr {
        BoolExpr::new_var(name)
    }

    #[test]
    fn test_new_has_empty_name() {
        for kind in [
            BoolExprKind::Iff,
            BoolExprKind::Imp,
            BoolExprKind::And,
            BoolExprKind::Or,
            BoolExprKind::Not,
            BoolExprKind::True,
            BoolExprKind::False,
        ]
        .iter()
        {
            let node = BoolExpr::new(*kind);
            assert_eq!(*kind, node.kind());
            assert_eq!("", node.name());
            assert!(!node.has_operands());
        }
    }

    #[test]
    fn test_add_operand_keeps_order() {
        let mut or = BoolExpr::new(BoolExprKind::Or);
        or.add_operand(var("a"));
        assert!(or.has_operands());
        or.add_operand(var("b"));
        or.add_operand(var("c"));
        assert_eq!(
            vec!["a", "b", "c"],
            or.operands().iter().map(|o| o.name()).collect::<Vec<&str>>()
        );
    }

    #[test]
    fn test_left_right() {
        let imp = BoolExpr::with_operands(BoolExprKind::Imp, vec![var("a"), var("b")]);
        assert_eq!("a", imp.left().name());
        assert_eq!("b", imp.right().name());
    }

    #[test]
    #[should_panic(expected = "expected a binary node, found a Not node with 1 operand(s)")]
    fn test_left_on_unary_node() {
        BoolExpr::with_operands(BoolExprKind::Not, vec![var("a")]).left();
    } // kcov-ignore

    #[test]
    #[should_panic(expected = "expected a binary node, found a Var node with 0 operand(s)")]
    fn test_right_on_leaf() {
        var("a").right();
    } // kcov-ignore

    #[test]
    fn test_arity() {
        assert_eq!(2, BoolExprKind::Iff.arity());
        assert_eq!(2, BoolExprKind::Imp.arity());
        assert_eq!(2, BoolExprKind::And.arity());
        assert_eq!(2, BoolExprKind::Or.arity());
        assert_eq!(1, BoolExprKind::Not.arity());
        assert_eq!(0, BoolExprKind::Var.arity());
        assert_eq!(0, BoolExprKind::True.arity());
        assert_eq!(0, BoolExprKind::False.arity());
    }

    #[test]
    fn test_structural_eq() {
        let a = BoolExpr::with_operands(BoolExprKind::And, vec![var("x"), var("y")]);
        let b = BoolExpr::with_operands(BoolExprKind::And, vec![var("x"), var("y")]);
        let c = BoolExpr::with_operands(BoolExprKind::Or, vec![var("x"), var("y")]);
        let d = BoolExpr::with_operands(BoolExprKind::And, vec![var("y"), var("x")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_display() {
        let f = BoolExpr::with_operands(
            BoolExprKind::Iff,
            vec![
                BoolExpr::with_operands(BoolExprKind::Not, vec![var("x")]),
                BoolExpr::new(BoolExprKind::True),
            ],
        );
        assert_eq!("(!x <=> 1)", format!("{}", f));
    }

    #[test]
    fn test_vars() {
        let f = BoolExpr::with_operands(
            BoolExprKind::Or,
            vec![
                BoolExpr::with_operands(BoolExprKind::And, vec![var("b"), var("a")]),
                BoolExpr::with_operands(BoolExprKind::Not, vec![var("b")]),
            ],
        );
        assert_eq!(vec!["a".to_string(), "b".to_string()], f.vars());
        assert!(BoolExpr::new(BoolExprKind::True).vars().is_empty());
    }
}
