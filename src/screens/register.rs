// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{self, PLACEHOLDER_KEY};
use crate::context::AppContext;
use crate::error::{StoreError, ValidationError};
use crate::format::Locale;
use crate::models::{Category, Transaction, TransactionKind};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub amount: String,
    pub kind: Option<TransactionKind>,
    pub category: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        RegisterForm {
            name: String::new(),
            amount: String::new(),
            kind: None,
            category: PLACEHOLDER_KEY.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Could not save: {0}")]
    Save(#[from] StoreError),
}

impl RegisterError {
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (RegisterError::Invalid(v), _) => v.message(locale),
            (RegisterError::Save(e), Locale::PtBr) => format!("Não foi possível salvar: {}", e),
            (RegisterError::Save(_), Locale::EnUs) => self.to_string(),
        }
    }
}

/// Largest amount a single transaction may carry.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterState {
    Idle,
    Submitting,
    Success(Transaction),
    /// Alert text shown to the user; the form is kept for a retry.
    Failure(String),
}

/// Where to go after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Listing,
}

pub struct Register<'c, 'a, Tz: TimeZone = chrono::Local> {
    ctx: &'c AppContext<'a, Tz>,
    form: RegisterForm,
    state: RegisterState,
}

impl<'c, 'a, Tz: TimeZone> Register<'c, 'a, Tz> {
    pub fn new(ctx: &'c AppContext<'a, Tz>) -> Self {
        Register {
            ctx,
            form: RegisterForm::default(),
            state: RegisterState::Idle,
        }
    }

    pub fn form(&self) -> &RegisterForm {
        &self.form
    }

    pub fn state(&self) -> &RegisterState {
        &self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.form.amount = amount.into();
    }

    pub fn select_kind(&mut self, kind: TransactionKind) {
        self.form.kind = Some(kind);
    }

    pub fn select_category(&mut self, key: impl Into<String>) {
        self.form.category = key.into();
    }

    pub fn submit(&mut self) -> Result<Navigation, RegisterError> {
        self.submit_at(Utc::now())
    }

    /// Validate, build the record dated `now`, and append it.
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<Navigation, RegisterError> {
        self.state = RegisterState::Submitting;
        let result = self.try_save(now);
        match result {
            Ok(tx) => {
                self.form = RegisterForm::default();
                self.state = RegisterState::Success(tx);
                Ok(Navigation::Listing)
            }
            Err(e) => {
                tracing::warn!(user_id = %self.ctx.user.id, error = %e, "register failed");
                self.state = RegisterState::Failure(e.message(self.ctx.locale));
                Err(e)
            }
        }
    }

    fn try_save(&self, now: DateTime<Utc>) -> Result<Transaction, RegisterError> {
        let (name, amount, kind, category) = validate(&self.form)?;
        let tx = Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            amount,
            kind,
            category: category.key.to_string(),
            date: now,
        };
        self.ctx.transactions().append(&self.ctx.user.id, &tx)?;
        Ok(tx)
    }
}

/// Check a form in the order the user fills it in.
pub fn validate(
    form: &RegisterForm,
) -> Result<(String, Decimal, TransactionKind, &'static Category), ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let amount = parse_amount(&form.amount)?;
    let kind = form.kind.ok_or(ValidationError::MissingType)?;
    let key = form.category.trim();
    if key.is_empty() || key == PLACEHOLDER_KEY {
        return Err(ValidationError::MissingCategory);
    }
    let category =
        categories::find(key).ok_or_else(|| ValidationError::UnknownCategory(key.to_string()))?;
    Ok((name.to_string(), amount, kind, category))
}

/// Accepts `12.50` as well as a lone decimal comma, `12,50`.
pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let normalized = if !s.contains('.') && s.matches(',').count() == 1 {
        s.replace(',', ".")
    } else {
        s.to_string()
    };
    let amount = normalized
        .parse::<Decimal>()
        .map_err(|_| ValidationError::AmountNotNumeric)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::AmountNotPositive);
    }
    let max = Decimal::from(MAX_AMOUNT_UNITS);
    if amount > max {
        return Err(ValidationError::AmountTooLarge(max));
    }
    Ok(amount)
}
