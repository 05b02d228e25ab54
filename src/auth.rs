// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Social sign-in boundary and the persisted current-user session.

use crate::error::AuthError;
use crate::models::User;
use crate::storage::{get_json, user_key, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Apple,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Apple => "Apple",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "google" => Some(Provider::Google),
            "apple" => Some(Provider::Apple),
            _ => None,
        }
    }
}

/// Something that can turn a sign-in attempt into a user identity.
pub trait AuthProvider {
    fn provider(&self) -> Provider;
    fn authenticate(&self) -> Result<User, AuthError>;
}

/// Hands back an identity supplied up front, in place of an OAuth round trip.
pub struct ProfileProvider {
    provider: Provider,
    profile: Option<User>,
}

impl ProfileProvider {
    pub fn new(provider: Provider, profile: Option<User>) -> Self {
        ProfileProvider { provider, profile }
    }
}

impl AuthProvider for ProfileProvider {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn authenticate(&self) -> Result<User, AuthError> {
        let user = self.profile.clone().ok_or_else(|| AuthError::Provider {
            provider: self.provider.name(),
            reason: "no profile returned".into(),
        })?;
        if user.id.trim().is_empty() {
            return Err(AuthError::Provider {
                provider: self.provider.name(),
                reason: "profile has an empty id".into(),
            });
        }
        Ok(user)
    }
}

pub struct AuthSession<'a> {
    kv: &'a dyn KeyValueStore,
    providers: Vec<Box<dyn AuthProvider + 'a>>,
    user: Option<User>,
}

impl<'a> AuthSession<'a> {
    /// Restore whatever user was last signed in on this device.
    pub fn restore(kv: &'a dyn KeyValueStore) -> Result<Self, AuthError> {
        let user: Option<User> = get_json(kv, &user_key())?;
        if let Some(u) = &user {
            tracing::debug!(user_id = %u.id, "restored session");
        }
        Ok(AuthSession {
            kv,
            providers: Vec::new(),
            user,
        })
    }

    pub fn with_provider(mut self, provider: impl AuthProvider + 'a) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn sign_in_with_google(&mut self) -> Result<User, AuthError> {
        self.sign_in(Provider::Google)
    }

    pub fn sign_in_with_apple(&mut self) -> Result<User, AuthError> {
        self.sign_in(Provider::Apple)
    }

    pub fn sign_in(&mut self, provider: Provider) -> Result<User, AuthError> {
        let p = self
            .providers
            .iter()
            .find(|p| p.provider() == provider)
            .ok_or(AuthError::Unavailable(provider.name()))?;
        let user = p.authenticate()?;
        crate::storage::set_json(self.kv, &user_key(), &user)?;
        tracing::info!(user_id = %user.id, provider = provider.name(), "signed in");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Forget the current user. Their transactions stay in storage.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.kv.remove_item(&user_key())?;
        if let Some(u) = self.user.take() {
            tracing::info!(user_id = %u.id, "signed out");
        }
        Ok(())
    }
}
