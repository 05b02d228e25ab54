// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::format::Locale;
use crate::utils::{get_locale, pretty_table, set_locale};
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", _)) => {
            let locale = get_locale(conn)?;
            println!(
                "{}",
                pretty_table(&["Setting", "Value"], vec![vec!["locale".into(), locale.tag().into()]])
            );
        }
        Some(("set-locale", sub)) => {
            let raw = sub.get_one::<String>("locale").unwrap();
            let locale = Locale::parse(raw)
                .ok_or_else(|| anyhow!("Unsupported locale '{}' (use pt-BR|en-US)", raw.trim()))?;
            set_locale(conn, locale)?;
            println!("Locale set to {}", locale.tag());
        }
        _ => {}
    }
    Ok(())
}
