// boolexpr_app_helper
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

use crate::logging::{self, DEFAULT_LOGGING_LEVEL, LOGGING_LEVELS};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::{error, info};

const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

/// A trait for the subcommands of an application.
pub trait Command<'a> {
    /// The name of the command, as given on the command line.
    fn name(&self) -> &str;

    /// The `clap` definition of the command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command, given the arguments it received.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}

/// A launcher for applications made of subcommands.
///
/// The launcher adds a global `--logging-level` option to the application,
/// initializes the logging system and dispatches the execution to the selected [`Command`].
/// If the command fails, the error and its causes are logged and the process exits with status 1.
pub struct AppHelper<'a> {
    app_name: &'a str,
    app_version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> AppHelper<'a> {
    /// Builds a new launcher, without any command.
    pub fn new(app_name: &'a str, app_version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            app_name,
            app_version,
            author,
            about,
            commands: vec![],
        }
    }

    /// Registers a new command.
    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command)
    }

    /// Parses the command line arguments and executes the selected command.
    ///
    /// This function does not return if an error occurs.
    pub fn launch_app(&self) {
        let arg_matches = self.clap_app().get_matches();
        let result = logging_level(&arg_matches)
            .and_then(logging::init_logger)
            .and_then(|_| self.dispatch(&arg_matches));
        if let Err(e) = result {
            let mut causes = e.chain();
            if let Some(c) = causes.next() {
                error!("{}", c);
            }
            causes.for_each(|c| error!("caused by: {}", c));
            std::process::exit(1);
        }
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .version(self.app_version)
            .author(self.author)
            .about(self.about)
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .setting(AppSettings::VersionlessSubcommands)
            .arg(
                Arg::with_name(ARG_LOGGING_LEVEL)
                    .long("logging-level")
                    .takes_value(true)
                    .possible_values(&LOGGING_LEVELS)
                    .global(true)
                    .help("sets the minimal level of the displayed log messages [default: info]"),
            );
        for command in self.commands.iter() {
            app = app.subcommand(command.clap_subcommand());
        }
        app
    }

    fn dispatch(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let (name, command_matches) = arg_matches.subcommand();
        let command = self
            .commands
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| anyhow!(r#"no such command "{}""#, name))?;
        let command_matches =
            command_matches.ok_or_else(|| anyhow!(r#"no arguments for command "{}""#, name))?;
        info!("{} {}", self.app_name, self.app_version);
        command
            .execute(command_matches)
            .with_context(|| format!(r#"while executing command "{}""#, name))
    }
}

fn logging_level(arg_matches: &ArgMatches<'_>) -> Result<log::LevelFilter> {
    let (_, command_matches) = arg_matches.subcommand();
    let level = command_matches
        .and_then(|m| m.value_of(ARG_LOGGING_LEVEL))
        .or_else(|| arg_matches.value_of(ARG_LOGGING_LEVEL))
        .unwrap_or(DEFAULT_LOGGING_LEVEL);
    logging::parse_logging_level(level)
}
