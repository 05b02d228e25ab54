// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use gofinances::{cli, commands, db, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::setup_logging(matches.get_count("verbose"));

    let db_arg = matches.get_one::<std::path::PathBuf>("db");
    let conn = db::open_or_init(db_arg.map(|p| p.as_path()))?;

    match matches.subcommand() {
        Some(("init", _)) => match db_arg {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        },
        Some(("auth", sub)) => commands::auth::handle(&conn, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&conn, sub)?,
        Some(("resume", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
