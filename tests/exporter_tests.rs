// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::models::{Transaction, TransactionKind, User};
use gofinances::storage::{set_json, user_key, TransactionStore};
use gofinances::{cli, commands::exporter};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    gofinances::db::init_schema(&conn).unwrap();
    let user = User {
        id: "u1".into(),
        name: "Ana".into(),
        email: None,
        photo: None,
    };
    set_json(&conn, &user_key(), &user).unwrap();
    conn
}

fn run_export(conn: &Connection, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "gofinances",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_writes_stored_records_as_json() {
    let conn = base_conn();
    TransactionStore::new(&conn)
        .append(
            "u1",
            &Transaction {
                id: "t-1".into(),
                name: "Corner Shop".into(),
                amount: "12.34".parse().unwrap(),
                kind: TransactionKind::Negative,
                category: "purchases".into(),
                date: "2025-01-02T10:00:00Z".parse().unwrap(),
            },
        )
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, "json", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": "t-1",
                "name": "Corner Shop",
                "amount": "12.34",
                "type": "negative",
                "category": "purchases",
                "date": "2025-01-02T10:00:00Z"
            }
        ])
    );
}

#[test]
fn export_transactions_csv_has_header_and_rows() {
    let conn = base_conn();
    let store = TransactionStore::new(&conn);
    for (id, amount) in [("a", "1"), ("b", "2.5")] {
        store
            .append(
                "u1",
                &Transaction {
                    id: id.into(),
                    name: "x".into(),
                    amount: amount.parse().unwrap(),
                    kind: TransactionKind::Positive,
                    category: "salary".into(),
                    date: "2025-03-01T00:00:00Z".parse().unwrap(),
                },
            )
            .unwrap();
    }

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    run_export(&conn, "csv", &out_path.to_string_lossy()).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "name", "type", "category", "amount"]
    );
    let amounts: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap().get(5).unwrap().to_string())
        .collect();
    assert_eq!(amounts, vec!["1", "2.5"]);
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&conn, "xml", &out_str).is_err());
    assert!(!out_path.exists());
}
