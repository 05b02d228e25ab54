// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::auth::{AuthSession, ProfileProvider, Provider};
use gofinances::error::AuthError;
use gofinances::models::{Transaction, TransactionKind, User};
use gofinances::storage::{user_key, KeyValueStore, TransactionStore};
use gofinances::{cli, commands::auth};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    gofinances::db::init_schema(&conn).unwrap();
    conn
}

fn profile(id: &str) -> User {
    User {
        id: id.into(),
        name: "Bruno".into(),
        email: Some("bruno@example.com".into()),
        photo: Some("https://example.com/b.png".into()),
    }
}

#[test]
fn signed_in_user_survives_a_restart() {
    let conn = setup();
    {
        let mut session = AuthSession::restore(&conn)
            .unwrap()
            .with_provider(ProfileProvider::new(Provider::Google, Some(profile("g-1"))));
        assert!(session.current_user().is_none());
        session.sign_in_with_google().unwrap();
    }
    let session = AuthSession::restore(&conn).unwrap();
    assert_eq!(session.current_user(), Some(&profile("g-1")));
}

#[test]
fn sign_out_forgets_user_but_keeps_their_transactions() {
    let conn = setup();
    let mut session = AuthSession::restore(&conn)
        .unwrap()
        .with_provider(ProfileProvider::new(Provider::Apple, Some(profile("a-1"))));
    session.sign_in_with_apple().unwrap();
    TransactionStore::new(&conn)
        .append(
            "a-1",
            &Transaction {
                id: "t".into(),
                name: "Gym".into(),
                amount: "99".parse().unwrap(),
                kind: TransactionKind::Negative,
                category: "leisure".into(),
                date: "2024-07-01T08:00:00Z".parse().unwrap(),
            },
        )
        .unwrap();

    session.sign_out().unwrap();
    assert!(session.current_user().is_none());
    assert_eq!(conn.get_item(&user_key()).unwrap(), None);
    assert_eq!(TransactionStore::new(&conn).load("a-1").unwrap().len(), 1);
}

#[test]
fn provider_without_identity_or_missing_provider_fails() {
    let conn = setup();
    let mut session = AuthSession::restore(&conn)
        .unwrap()
        .with_provider(ProfileProvider::new(Provider::Google, Some(profile("  "))));
    assert!(matches!(
        session.sign_in_with_google(),
        Err(AuthError::Provider { provider: "Google", .. })
    ));
    assert!(matches!(
        session.sign_in_with_apple(),
        Err(AuthError::Unavailable("Apple"))
    ));
    assert!(session.current_user().is_none());
}

#[test]
fn cli_sign_in_then_sign_out() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "gofinances",
        "auth",
        "sign-in",
        "--provider",
        "apple",
        "--id",
        " a-2 ",
        "--name",
        "Carla",
    ]);
    if let Some(("auth", auth_m)) = matches.subcommand() {
        auth::handle(&conn, auth_m).unwrap();
    } else {
        panic!("auth command not parsed");
    }
    let user = AuthSession::restore(&conn).unwrap().current_user().cloned().unwrap();
    assert_eq!(user.id, "a-2");
    assert_eq!(user.name, "Carla");

    let matches = cli::build_cli().get_matches_from(["gofinances", "auth", "sign-out"]);
    if let Some(("auth", auth_m)) = matches.subcommand() {
        auth::handle(&conn, auth_m).unwrap();
    } else {
        panic!("auth command not parsed");
    }
    assert!(AuthSession::restore(&conn).unwrap().current_user().is_none());
}
