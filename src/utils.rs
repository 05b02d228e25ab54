// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::format::Locale;
use crate::models::ReportWindow;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection, OptionalExtension};

pub fn parse_month(s: &str) -> Result<ReportWindow> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    ReportWindow::new(d.year(), d.month())
        .ok_or_else(|| anyhow::anyhow!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

// Display settings
pub fn get_locale(conn: &Connection) -> Result<Locale> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='locale'", [], |r| {
            r.get(0)
        })
        .optional()?;
    match v {
        Some(tag) => Locale::parse(&tag)
            .with_context(|| format!("Unsupported locale '{}' in settings", tag)),
        None => Ok(Locale::default()),
    }
}

pub fn set_locale(conn: &Connection, locale: Locale) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('locale', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![locale.tag()],
    )?;
    Ok(())
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
