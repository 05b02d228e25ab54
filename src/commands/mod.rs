// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod exporter;
pub mod reports;
pub mod transactions;

use crate::auth::AuthSession;
use crate::context::AppContext;
use crate::utils::get_locale;
use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::Connection;

/// Context for the signed-in user, shown in the local time zone.
pub fn app_context(conn: &Connection) -> Result<AppContext<'_>> {
    let session = AuthSession::restore(conn)?;
    let user = session
        .current_user()
        .cloned()
        .context("Not signed in; run `gofinances auth sign-in` first")?;
    let locale = get_locale(conn)?;
    Ok(AppContext::new(conn, user, locale, Local))
}
