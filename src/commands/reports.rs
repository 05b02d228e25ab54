// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ReportWindow;
use crate::screens::resume::Resume;
use crate::utils::{maybe_print_json, parse_month, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;

/// Monthly spend by category, optionally stepped from the chosen month.
pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let ctx = super::app_context(conn)?;
    let mut window = match m.get_one::<String>("month") {
        Some(month) => parse_month(month)?,
        None => ReportWindow::containing(&chrono::Utc::now(), &ctx.tz),
    };
    for _ in 0..m.get_one::<u32>("prev").copied().unwrap_or(0) {
        window = window.prev();
    }
    for _ in 0..m.get_one::<u32>("next").copied().unwrap_or(0) {
        window = window.next();
    }
    let mut screen = Resume::at(&ctx, window);
    screen.refresh();
    let view = screen.view().context("Resume did not finish loading")?;

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), view)? {
        return Ok(());
    }
    if let Some(notice) = &view.notice {
        eprintln!("warning: storage could not be read: {}", notice);
    }
    println!("{}", view.title);
    if view.categories.is_empty() {
        println!("No expenses this month");
        return Ok(());
    }
    let rows = view
        .categories
        .iter()
        .map(|c| {
            vec![
                c.category.name.to_string(),
                c.total_formatted.clone(),
                c.category.percent.clone(),
                c.category.color.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", "Color"], rows)
    );
    Ok(())
}
