// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::format::Locale;
use gofinances::{cli, commands::config, utils::get_locale};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    gofinances::db::init_schema(&conn).unwrap();
    conn
}

fn run(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["gofinances", "config"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("config", m)) => config::handle(conn, m),
        _ => panic!("config command not parsed"),
    }
}

#[test]
fn set_locale_accepts_loose_tags() {
    let conn = setup();
    run(&conn, &["set-locale", " en_us "]).unwrap();
    assert_eq!(get_locale(&conn).unwrap(), Locale::EnUs);
    run(&conn, &["set-locale", "pt-BR"]).unwrap();
    assert_eq!(get_locale(&conn).unwrap(), Locale::PtBr);
}

#[test]
fn set_locale_rejects_unknown_tags() {
    let conn = setup();
    let err = run(&conn, &["set-locale", "fr-FR"]).unwrap_err();
    assert!(err.to_string().contains("Unsupported locale"));
    assert_eq!(get_locale(&conn).unwrap(), Locale::PtBr);
}

#[test]
fn dashboard_follows_the_configured_locale() {
    let conn = setup();
    run(&conn, &["set-locale", "en-US"]).unwrap();
    gofinances::storage::set_json(
        &conn,
        &gofinances::storage::user_key(),
        &gofinances::models::User {
            id: "u1".into(),
            name: "Ana".into(),
            email: None,
            photo: None,
        },
    )
    .unwrap();

    let ctx = gofinances::commands::app_context(&conn).unwrap();
    let mut screen = gofinances::screens::dashboard::Dashboard::new(&ctx);
    screen.refresh().unwrap();
    let view = screen.view().unwrap();
    assert_eq!(view.entries.title, "Entries");
    assert_eq!(view.entries.amount, "$0.00");
    assert_eq!(view.expenses.last_transaction, "No transactions");
}
