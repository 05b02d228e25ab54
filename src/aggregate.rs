// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Totals over a user's history and the monthly spend-by-category report.

use crate::models::{Category, ReportWindow, Transaction, TransactionKind};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "date")]
pub enum LastTransaction {
    At(DateTime<Utc>),
    NoTransactions,
}

impl LastTransaction {
    pub fn date(&self) -> Option<&DateTime<Utc>> {
        match self {
            LastTransaction::At(d) => Some(d),
            LastTransaction::NoTransactions => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub entries_total: Decimal,
    /// Zero or negative.
    pub expenses_total: Decimal,
    pub net_total: Decimal,
    pub last_entry: LastTransaction,
    pub last_expense: LastTransaction,
}

/// Totals over the whole history; no window applies here.
///
/// Sums saturate at the `Decimal` bounds rather than overflow.
pub fn summarize(txs: &[Transaction]) -> Totals {
    let mut entries_total = Decimal::ZERO;
    let mut expenses_total = Decimal::ZERO;
    for tx in txs {
        match tx.kind {
            TransactionKind::Positive => entries_total = entries_total.saturating_add(tx.amount),
            TransactionKind::Negative => expenses_total = expenses_total.saturating_sub(tx.amount),
        }
    }
    Totals {
        entries_total,
        expenses_total,
        net_total: entries_total.saturating_add(expenses_total),
        last_entry: last_transaction(txs, TransactionKind::Positive),
        last_expense: last_transaction(txs, TransactionKind::Negative),
    }
}

/// Latest date among `kind` records. Ties are indistinguishable since only the date is reported.
pub fn last_transaction(txs: &[Transaction], kind: TransactionKind) -> LastTransaction {
    txs.iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.date)
        .max()
        .map(LastTransaction::At)
        .unwrap_or(LastTransaction::NoTransactions)
}

/// Expense records whose month and year match `window` in `tz`.
pub fn window_expenses<'a, Tz: TimeZone + 'a>(
    txs: &'a [Transaction],
    window: &'a ReportWindow,
    tz: &'a Tz,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    txs.iter()
        .filter(move |t| t.kind == TransactionKind::Negative && window.contains(&t.date, tz))
}

/// Saturating sum of `amount` over `txs`.
pub fn total<'a>(txs: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    txs.into_iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub total: Decimal,
    pub percent: String,
}

/// Per-category expense sums for `window`, in `categories` order.
///
/// Only categories with a positive sum are listed. Percentages are taken
/// against every expense in the window, including ones whose category key is
/// unknown, so they may not add up to 100. A window without expenses yields
/// an empty list.
pub fn category_breakdown<Tz: TimeZone>(
    txs: &[Transaction],
    window: &ReportWindow,
    categories: &'static [Category],
    tz: &Tz,
) -> Vec<CategoryTotal> {
    let expenses: Vec<&Transaction> = window_expenses(txs, window, tz).collect();
    let window_total = total(expenses.iter().copied());
    if window_total <= Decimal::ZERO {
        return Vec::new();
    }

    let mut out = Vec::new();
    for category in categories {
        let sum = total(
            expenses
                .iter()
                .copied()
                .filter(|t| t.category == category.key),
        );
        if sum > Decimal::ZERO {
            let pct = (sum / window_total * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            out.push(CategoryTotal {
                key: category.key,
                name: category.name,
                color: category.color,
                total: sum,
                percent: format!("{:.0}%", pct),
            });
        }
    }
    out
}
