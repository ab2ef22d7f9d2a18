// boolexpr
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

use super::{
    arg_formula, arg_input, arg_output, create_output, group_formula_source, read_formula,
};
use anyhow::{Context, Result};
use boolexpr_app_helper::{App, AppSettings, ArgMatches, Command, SubCommand};
use boolexpr_logic::BoolExpr;
use std::io::Write;

pub(crate) struct ShapeCommand;

const CMD_NAME: &str = "shape";

impl ShapeCommand {
    pub fn new() -> Self {
        ShapeCommand
    }

    fn write(&self, formula: &BoolExpr, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing the shape of a formula";
        let yes_no = |b| if b { "yes" } else { "no" };
        writeln!(writer, "conjunction: {}", yes_no(formula.is_conjunction())).context(context)?;
        writeln!(writer, "disjunction: {}", yes_no(formula.is_disjunction())).context(context)?;
        writeln!(writer, "variables: {}", formula.vars().join(" ")).context(context)?;
        writer.flush()?;
        Ok(())
    }
}

impl<'a> Command<'a> for ShapeCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Tells whether the root of a formula is a conjunction or a disjunction, and lists its variables.")
            .setting(AppSettings::DisableVersion)
            .arg(arg_formula())
            .arg(arg_input())
            .group(group_formula_source())
            .arg(arg_output())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let formula = read_formula(arg_matches)?;
        let mut output = create_output(arg_matches)?;
        self.write(&formula, output.as_mut())
    }
}
