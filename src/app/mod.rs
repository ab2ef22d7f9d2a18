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

mod clause_command;
pub(crate) use clause_command::ClauseCommand;

mod demo_command;
pub(crate) use demo_command::DemoCommand;

mod infix_command;
pub(crate) use infix_command::InfixCommand;

mod shape_command;
pub(crate) use shape_command::ShapeCommand;

use anyhow::{Context, Result};
use boolexpr_app_helper::{info, Arg, ArgGroup, ArgMatches};
use boolexpr_logic::{BoolExpr, Parser};
use fs::File;
use std::path::PathBuf;
use std::{fs, io::Write};

const ARG_FORMULA: &str = "FORMULA";
const ARG_INPUT: &str = "INPUT";
const ARG_OUTPUT: &str = "OUTPUT";
const GROUP_FORMULA_SOURCE: &str = "FORMULA_SOURCE";

pub(crate) fn arg_formula<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_FORMULA)
        .long("formula")
        .short("f")
        .takes_value(true)
        .help("sets the formula to process")
}

pub(crate) fn arg_input<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_INPUT)
        .long("input")
        .short("i")
        .takes_value(true)
        .help("sets the file containing the formula to process")
}

pub(crate) fn group_formula_source<'a>() -> ArgGroup<'a> {
    ArgGroup::with_name(GROUP_FORMULA_SOURCE)
        .args(&[ARG_FORMULA, ARG_INPUT])
        .required(true)
}

pub(crate) fn read_formula(arg_matches: &ArgMatches<'_>) -> Result<BoolExpr> {
    let text = match arg_matches.value_of(ARG_INPUT) {
        Some(file_path) => {
            info!("reading formula from file {}", canonicalize(file_path));
            fs::read_to_string(file_path)
                .with_context(|| format!(r#"while reading file "{}""#, file_path))?
        }
        None => {
            info!("reading formula from the command line");
            arg_matches.value_of(ARG_FORMULA).unwrap_or_default().to_string()
        }
    };
    Parser::default()
        .parse(&text)
        .with_context(|| format!(r#"while parsing formula "{}""#, text.trim()))
}

pub(crate) fn arg_output<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_OUTPUT)
        .long("output")
        .short("o")
        .takes_value(true)
        .help("sets the output file")
}

pub(crate) fn create_output(arg_matches: &ArgMatches<'_>) -> Result<Box<dyn Write>> {
    Ok(match arg_matches.value_of(ARG_OUTPUT) {
        Some(o) => {
            let r = Box::new(
                File::create(o).with_context(|| format!(r#"while creating file "{}""#, o))?,
            );
            info!("setting output file to {}", canonicalize(o));
            r
        }
        None => {
            info!("setting output to STDOUT");
            Box::new(std::io::stdout())
        }
    })
}

pub(crate) fn canonicalize(file_path: &str) -> String {
    match fs::canonicalize(&PathBuf::from(file_path)) {
        Ok(p) => format!("{}", p.display()),
        Err(_) => file_path.to_string(),
    }
}
