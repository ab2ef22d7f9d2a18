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

//! A library for propositional formulas written in infix notation.
//!
//! Formulas are read by a [`Parser`] into trees of [`BoolExpr`] nodes,
//! which can then be walked by [`Visitor`] implementations
//! such as the [`InfixRenderer`], the [`ClauseRenderer`] and the shape testers.

mod core;
mod parser;
mod visitor;

pub use crate::core::BoolExpr;
pub use crate::core::BoolExprKind;

pub use parser::Parser;

pub use visitor::traverse_dfs_preorder;
pub use visitor::ClauseRenderer;
pub use visitor::ConjunctionTester;
pub use visitor::DisjunctionTester;
pub use visitor::InfixRenderer;
pub use visitor::Visitor;
