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

pub(crate) struct InfixCommand;

const CMD_NAME: &str = "infix";

impl InfixCommand {
    pub fn new() -> Self {
        InfixCommand
    }

    fn write(&self, formula: &BoolExpr, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "{}", formula).context("while writing a formula")?;
        writer.flush()?;
        Ok(())
    }
}

impl<'a> Command<'a> for InfixCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes a formula using the fully parenthesized infix notation.")
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
