// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::screens::dashboard::Dashboard;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let ctx = super::app_context(conn)?;
    let mut screen = Dashboard::new(&ctx);
    screen.refresh()?;
    let view = screen.view().context("Dashboard did not finish loading")?;

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), view)? {
        return Ok(());
    }
    if let Some(notice) = &view.notice {
        eprintln!("warning: showing an empty list, storage could not be read: {}", notice);
    }
    println!("Olá, {}", view.user_name);
    let cards = [&view.entries, &view.expenses, &view.total]
        .iter()
        .map(|c| vec![c.title.to_string(), c.amount.clone(), c.last_transaction.clone()])
        .collect();
    println!("{}", pretty_table(&["", "Amount", "Last transaction"], cards));

    let rows = view
        .transactions
        .iter()
        .map(|t| {
            vec![
                t.name.clone(),
                t.amount.clone(),
                t.kind.as_str().to_string(),
                crate::categories::find(&t.category)
                    .map(|c| c.name.to_string())
                    .unwrap_or_else(|| t.category.clone()),
                t.date.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Name", "Amount", "Type", "Category", "Date"], rows)
    );
    Ok(())
}
