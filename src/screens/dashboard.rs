// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{summarize, LastTransaction, Totals};
use crate::context::AppContext;
use crate::error::FormatError;
use crate::format::{format_currency, format_day_month, format_transaction, Locale, TransactionDisplay};
use chrono::TimeZone;
use std::fmt::Display;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightCard {
    pub title: &'static str,
    pub amount: String,
    pub last_transaction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub user_name: String,
    pub entries: HighlightCard,
    pub expenses: HighlightCard,
    pub total: HighlightCard,
    pub totals: Totals,
    pub transactions: Vec<TransactionDisplay>,
    /// Set when storage could not be read and an empty list is shown instead.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(DashboardView),
}

pub struct Dashboard<'c, 'a, Tz: TimeZone = chrono::Local> {
    ctx: &'c AppContext<'a, Tz>,
    state: DashboardState,
}

impl<'c, 'a, Tz> Dashboard<'c, 'a, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(ctx: &'c AppContext<'a, Tz>) -> Self {
        Dashboard {
            ctx,
            state: DashboardState::Loading,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DashboardState::Loading)
    }

    pub fn view(&self) -> Option<&DashboardView> {
        match &self.state {
            DashboardState::Ready(v) => Some(v),
            DashboardState::Loading => None,
        }
    }

    /// Reload everything from storage; call whenever the screen regains focus.
    pub fn refresh(&mut self) -> Result<(), FormatError> {
        self.state = DashboardState::Loading;
        let (txs, notice) = match self.ctx.transactions().load(&self.ctx.user.id) {
            Ok(txs) => (txs, None),
            Err(e) => {
                tracing::warn!(user_id = %self.ctx.user.id, error = %e, "could not read transactions");
                (Vec::new(), Some(e.to_string()))
            }
        };

        let locale = self.ctx.locale;
        let tz = &self.ctx.tz;
        let transactions = txs
            .iter()
            .map(|t| format_transaction(t, locale, tz))
            .collect::<Result<Vec<_>, _>>()?;
        let totals = summarize(&txs);
        let view = DashboardView {
            user_name: self.ctx.user.name.clone(),
            entries: card(
                entries_title(locale),
                totals.entries_total,
                last_caption(&totals.last_entry, locale, tz, true),
                locale,
            ),
            expenses: card(
                expenses_title(locale),
                totals.expenses_total,
                last_caption(&totals.last_expense, locale, tz, false),
                locale,
            ),
            total: card(
                "Total",
                totals.net_total,
                interval_caption(&totals.last_expense, locale, tz),
                locale,
            ),
            totals,
            transactions,
            notice,
        };
        self.state = DashboardState::Ready(view);
        Ok(())
    }
}

fn card(
    title: &'static str,
    amount: Decimal,
    last_transaction: String,
    locale: Locale,
) -> HighlightCard {
    HighlightCard {
        title,
        amount: format_currency(amount, locale),
        last_transaction,
    }
}

fn entries_title(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Entradas",
        Locale::EnUs => "Entries",
    }
}

fn expenses_title(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Saídas",
        Locale::EnUs => "Expenses",
    }
}

fn last_caption<Tz: TimeZone>(
    last: &LastTransaction,
    locale: Locale,
    tz: &Tz,
    entry: bool,
) -> String {
    let Some(date) = last.date() else {
        return locale.no_transactions().to_string();
    };
    let day_month = format_day_month(date, locale, tz);
    match (locale, entry) {
        (Locale::PtBr, true) => format!("Última entrada {}", day_month),
        (Locale::PtBr, false) => format!("Última saída {}", day_month),
        (Locale::EnUs, true) => format!("Last entry {}", day_month),
        (Locale::EnUs, false) => format!("Last expense {}", day_month),
    }
}

// The net card spans from the first of the month to the latest expense.
fn interval_caption<Tz: TimeZone>(last_expense: &LastTransaction, locale: Locale, tz: &Tz) -> String {
    let Some(date) = last_expense.date() else {
        return locale.no_transactions().to_string();
    };
    let day_month = format_day_month(date, locale, tz);
    match locale {
        Locale::PtBr => format!("01 a {}", day_month),
        Locale::EnUs => format!("01 to {}", day_month),
    }
}
