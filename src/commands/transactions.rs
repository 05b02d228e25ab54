// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::context::AppContext;
use crate::format::{format_transaction, TransactionDisplay};
use crate::models::TransactionKind;
use crate::screens::register::{Register, RegisterState};
use crate::utils::{maybe_print_json, parse_month, pretty_table};
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let ctx = super::app_context(conn)?;
    match m.subcommand() {
        Some(("add", sub)) => add(&ctx, sub)?,
        Some(("list", sub)) => list(&ctx, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ctx: &AppContext<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let mut screen = Register::new(ctx);
    if let Some(name) = sub.get_one::<String>("name") {
        screen.set_name(name.as_str());
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        screen.set_amount(amount.as_str());
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        let kind = TransactionKind::parse(kind)
            .ok_or_else(|| anyhow!("Unknown transaction type '{}' (use positive|negative)", kind))?;
        screen.select_kind(kind);
    }
    if let Some(category) = sub.get_one::<String>("category") {
        screen.select_category(category.as_str());
    }

    if let Err(e) = screen.submit() {
        return Err(anyhow!(e.message(ctx.locale)));
    }
    if let RegisterState::Success(tx) = screen.state() {
        let display = format_transaction(tx, ctx.locale, &ctx.tz)?;
        println!(
            "Recorded {} {} '{}' in {} on {}",
            tx.kind.as_str(),
            display.amount,
            display.name,
            categories::find(&tx.category).map(|c| c.name).unwrap_or(tx.category.as_str()),
            display.date
        );
    }
    Ok(())
}

fn list(ctx: &AppContext<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ctx, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.name.clone(),
                    r.kind.as_str().to_string(),
                    r.amount.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Name", "Type", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

/// Stored transactions for the current user, newest first, after the list filters.
pub fn query_rows(ctx: &AppContext<'_>, sub: &clap::ArgMatches) -> Result<Vec<TransactionDisplay>> {
    let mut txs = ctx.transactions().load(&ctx.user.id)?;

    if let Some(month) = sub.get_one::<String>("month") {
        let window = parse_month(month)?;
        txs.retain(|t| window.contains(&t.date, &ctx.tz));
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        let kind = TransactionKind::parse(kind)
            .ok_or_else(|| anyhow!("Unknown transaction type '{}'", kind))?;
        txs.retain(|t| t.kind == kind);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        let cat = cat.trim();
        txs.retain(|t| t.category == cat);
    }
    // stable sort keeps write order among equal dates, reversed below
    txs.sort_by(|a, b| a.date.cmp(&b.date));
    txs.reverse();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }

    let data = txs
        .iter()
        .map(|t| format_transaction(t, ctx.locale, &ctx.tz))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(data)
}
