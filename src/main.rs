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

mod app;

use app::{ClauseCommand, DemoCommand, InfixCommand, ShapeCommand};
use boolexpr_app_helper::AppHelper;

fn main() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Parses propositional formulas written in infix notation and renders them.",
    );
    app.add_command(Box::new(InfixCommand::new()));
    app.add_command(Box::new(ClauseCommand::new()));
    app.add_command(Box::new(ShapeCommand::new()));
    app.add_command(Box::new(DemoCommand::new()));
    app.launch_app();
}
