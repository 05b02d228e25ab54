// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{AuthSession, Provider};
use crate::format::Locale;
use crate::models::User;

pub struct SignIn<'s, 'a> {
    session: &'s mut AuthSession<'a>,
    locale: Locale,
    is_loading: bool,
    alert: Option<String>,
}

impl<'s, 'a> SignIn<'s, 'a> {
    pub fn new(session: &'s mut AuthSession<'a>, locale: Locale) -> Self {
        SignIn {
            session,
            locale,
            is_loading: false,
            alert: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// On success the loading flag stays up; the app leaves this screen.
    pub fn handle_sign_in(&mut self, provider: Provider) -> Option<User> {
        self.is_loading = true;
        self.alert = None;
        match self.session.sign_in(provider) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "sign-in failed");
                self.alert = Some(self.locale.sign_in_failed(provider.name()));
                self.is_loading = false;
                None
            }
        }
    }
}
