// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{AuthSession, ProfileProvider, Provider};
use crate::models::User;
use crate::screens::sign_in::SignIn;
use crate::utils::{get_locale, maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("sign-in", sub)) => sign_in(conn, sub)?,
        Some(("sign-out", _)) => {
            let mut session = AuthSession::restore(conn)?;
            let who = session.current_user().map(|u| u.name.clone());
            session.sign_out()?;
            match who {
                Some(name) => println!("Signed out {}", name),
                None => println!("No one was signed in"),
            }
        }
        Some(("whoami", sub)) => whoami(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn sign_in(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let provider_arg = sub.get_one::<String>("provider").unwrap();
    let provider =
        Provider::parse(provider_arg).ok_or_else(|| anyhow!("Unknown provider '{}'", provider_arg))?;
    let profile = User {
        id: sub.get_one::<String>("id").unwrap().trim().to_string(),
        name: sub.get_one::<String>("name").unwrap().trim().to_string(),
        email: sub.get_one::<String>("email").map(|s| s.trim().to_string()),
        photo: sub.get_one::<String>("photo").map(|s| s.trim().to_string()),
    };

    let locale = get_locale(conn)?;
    let mut session =
        AuthSession::restore(conn)?.with_provider(ProfileProvider::new(provider, Some(profile)));
    let mut screen = SignIn::new(&mut session, locale);
    match screen.handle_sign_in(provider) {
        Some(user) => {
            println!("Signed in as {} ({})", user.name, user.id);
            Ok(())
        }
        None => Err(anyhow!(
            "{}",
            screen.alert().unwrap_or("Sign-in failed").to_string()
        )),
    }
}

fn whoami(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let session = AuthSession::restore(conn)?;
    let Some(user) = session.current_user() else {
        println!("Not signed in");
        return Ok(());
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), user)? {
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Email", "Photo"],
                vec![vec![
                    user.id.clone(),
                    user.name.clone(),
                    user.email.clone().unwrap_or_default(),
                    user.photo.clone().unwrap_or_default(),
                ]],
            )
        );
    }
    Ok(())
}
