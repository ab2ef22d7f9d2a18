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

mod clause_renderer;
pub use clause_renderer::ClauseRenderer;

mod dispatch;
pub use dispatch::traverse_dfs_preorder;
pub use dispatch::Visitor;

mod infix_renderer;
pub use infix_renderer::InfixRenderer;

mod shape_testers;
pub use shape_testers::ConjunctionTester;
pub use shape_testers::DisjunctionTester;

mod var_collector;
pub(crate) use var_collector::VarCollector;
