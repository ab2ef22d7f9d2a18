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

use super::{arg_output, create_output};
use anyhow::{Context, Result};
use boolexpr_app_helper::{App, AppSettings, ArgMatches, Command, SubCommand};
use boolexpr_logic::Parser;
use std::io::Write;

pub(crate) struct DemoCommand;

const CMD_NAME: &str = "demo";

const INFIX_FORMULAS: [&str; 2] = ["1 & x | 0", "1 & (x | 0)"];

const CLAUSE_FORMULAS: [&str; 1] = ["x & (!x | y)"];

impl DemoCommand {
    pub fn new() -> Self {
        DemoCommand
    }

    fn write(&self, writer: &mut dyn Write) -> Result<()> {
        let parser = Parser::default();
        for f in INFIX_FORMULAS.iter() {
            let formula = parser.parse(f)?;
            writeln!(writer, "{}", formula).context("while writing a formula")?;
        }
        for f in CLAUSE_FORMULAS.iter() {
            let formula = parser.parse(f)?;
            writeln!(writer, "{}", formula.to_sat_string()).context("while writing clauses")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl<'a> Command<'a> for DemoCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Parses some built-in formulas and writes them.")
            .setting(AppSettings::DisableVersion)
            .arg(arg_output())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let mut output = create_output(arg_matches)?;
        self.write(output.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write() {
        let mut result = Vec::new();
        DemoCommand::new().write(&mut result).unwrap();
        assert_eq!(
            "((1 & x) | 0)\n(1 & (x | 0))\nx\n-x y\n",
            String::from_utf8(result).unwrap()
        )
    }
}
