// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::format::Locale;
use crate::models::User;
use crate::storage::{KeyValueStore, TransactionStore};
use chrono::{Local, TimeZone};

/// What every screen needs: where data lives, who is looking, and how to show it.
///
/// `tz` resolves each record's calendar day with the rules in force at that
/// record's instant, so months line up across daylight-saving changes.
pub struct AppContext<'a, Tz: TimeZone = Local> {
    pub kv: &'a dyn KeyValueStore,
    pub user: User,
    pub locale: Locale,
    pub tz: Tz,
}

impl<'a, Tz: TimeZone> AppContext<'a, Tz> {
    pub fn new(kv: &'a dyn KeyValueStore, user: User, locale: Locale, tz: Tz) -> Self {
        AppContext {
            kv,
            user,
            locale,
            tz,
        }
    }

    pub fn transactions(&self) -> TransactionStore<'a> {
        TransactionStore::new(self.kv)
    }
}
