// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::CATEGORIES;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &CATEGORIES)? {
            let data = CATEGORIES
                .iter()
                .map(|c| vec![c.key.to_string(), c.name.to_string(), c.color.to_string()])
                .collect();
            println!("{}", pretty_table(&["Key", "Name", "Color"], data));
        }
    }
    Ok(())
}
