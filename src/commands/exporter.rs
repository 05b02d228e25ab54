// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use anyhow::{bail, Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let ctx = super::app_context(conn)?;
            export_transactions(&ctx, sub)
        }
        _ => Ok(()),
    }
}

/// Raw stored records in write order; amounts stay unformatted.
fn export_transactions(ctx: &AppContext<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let txs = ctx.transactions().load(&ctx.user.id)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(["id", "date", "name", "type", "category", "amount"])?;
            for t in &txs {
                let date = t.date.to_rfc3339();
                let amount = t.amount.to_string();
                wtr.write_record([
                    t.id.as_str(),
                    date.as_str(),
                    t.name.as_str(),
                    t.kind.as_str(),
                    t.category.as_str(),
                    amount.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    tracing::info!(count = txs.len(), out = %out, "exported transactions");
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
