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

use crate::{traverse_dfs_preorder, BoolExpr, Visitor};
use std::mem;

/// Collects the names of the variables of a formula, in document order and with duplicates.
#[derive(Default)]
pub(crate) struct VarCollector {
    names: Vec<String>,
}

impl VarCollector {
    pub(crate) fn collect(&mut self, expr: &BoolExpr) -> Vec<String> {
        self.names.clear();
        traverse_dfs_preorder(self, expr);
        mem::take(&mut self.names)
    }
}

impl Visitor for VarCollector {
    fn visit_var(&mut self, expr: &BoolExpr) {
        self.names.push(expr.name().to_string())
    }
}
