// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display formatting for amounts, dates and stored transactions.

use crate::error::FormatError;
use crate::models::{ReportWindow, Transaction, TransactionKind};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Some(Locale::PtBr),
            "en-us" | "en" => Some(Locale::EnUs),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    fn month_name(&self, month: u32) -> &'static str {
        let i = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::PtBr => MONTHS_PT[i],
            Locale::EnUs => MONTHS_EN[i],
        }
    }

    /// Caption used when a type has no transactions at all.
    pub fn no_transactions(&self) -> &'static str {
        match self {
            Locale::PtBr => "Não há transações",
            Locale::EnUs => "No transactions",
        }
    }

    pub fn sign_in_failed(&self, provider: &str) -> String {
        match self {
            Locale::PtBr => format!("Não foi possível conectar a conta {}", provider),
            Locale::EnUs => format!("Could not connect the {} account", provider),
        }
    }
}

/// Locale currency text, e.g. `R$ 1.234,56` or `$1,234.56`.
pub fn format_currency(amount: Decimal, locale: Locale) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    match locale {
        Locale::PtBr => format!("{}R$ {},{}", sign, group_thousands(int_part, '.'), frac_part),
        Locale::EnUs => format!("{}${}.{}", sign, group_thousands(int_part, ','), frac_part),
    }
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Two-digit day, month and year in locale order.
pub fn format_short_date<Tz: TimeZone>(date: &DateTime<Utc>, locale: Locale, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = date.with_timezone(tz);
    match locale {
        Locale::PtBr => local.format("%d/%m/%y").to_string(),
        Locale::EnUs => local.format("%m/%d/%y").to_string(),
    }
}

/// `5 de janeiro` / `January 5`.
pub fn format_day_month<Tz: TimeZone>(date: &DateTime<Utc>, locale: Locale, tz: &Tz) -> String {
    let local = date.with_timezone(tz);
    match locale {
        Locale::PtBr => format!("{} de {}", local.day(), locale.month_name(local.month())),
        Locale::EnUs => format!("{} {}", locale.month_name(local.month()), local.day()),
    }
}

/// `janeiro, 2023` / `January, 2023`.
pub fn format_month_year(window: &ReportWindow, locale: Locale) -> String {
    format!("{}, {}", locale.month_name(window.month), window.year)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDisplay {
    pub id: String,
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
}

/// Render one stored record. The sign is carried by `kind`, never by the text.
pub fn format_transaction<Tz: TimeZone>(
    tx: &Transaction,
    locale: Locale,
    tz: &Tz,
) -> Result<TransactionDisplay, FormatError>
where
    Tz::Offset: std::fmt::Display,
{
    if tx.amount.is_sign_negative() && !tx.amount.is_zero() {
        return Err(FormatError::NegativeAmount {
            id: tx.id.clone(),
            amount: tx.amount,
        });
    }
    Ok(TransactionDisplay {
        id: tx.id.clone(),
        name: tx.name.clone(),
        amount: format_currency(tx.amount, locale),
        kind: tx.kind,
        category: tx.category.clone(),
        date: format_short_date(&tx.date, locale, tz),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn currency_groups_thousands_per_locale() {
        assert_eq!(format_currency(dec("1234.5"), Locale::PtBr), "R$ 1.234,50");
        assert_eq!(format_currency(dec("1234567.891"), Locale::EnUs), "$1,234,567.89");
        assert_eq!(format_currency(dec("0"), Locale::PtBr), "R$ 0,00");
        assert_eq!(format_currency(dec("999"), Locale::PtBr), "R$ 999,00");
    }

    #[test]
    fn negative_totals_keep_their_sign() {
        assert_eq!(format_currency(dec("-40"), Locale::PtBr), "-R$ 40,00");
        assert_eq!(format_currency(dec("-0.001"), Locale::EnUs), "$0.00");
    }

    #[test]
    fn short_date_uses_two_digit_fields_in_the_viewer_zone() {
        let d = at("2023-01-05T12:00:00Z");
        assert_eq!(format_short_date(&d, Locale::PtBr, &Utc), "05/01/23");
        assert_eq!(format_short_date(&d, Locale::EnUs, &Utc), "01/05/23");

        let late = at("2023-02-01T01:30:00Z");
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(format_short_date(&late, Locale::PtBr, &brt), "31/01/23");
    }

    #[test]
    fn captions() {
        let d = at("2023-01-05T12:00:00Z");
        assert_eq!(format_day_month(&d, Locale::PtBr, &Utc), "5 de janeiro");
        assert_eq!(format_day_month(&d, Locale::EnUs, &Utc), "January 5");
        let w = ReportWindow::new(2023, 3).unwrap();
        assert_eq!(format_month_year(&w, Locale::PtBr), "março, 2023");
    }

    #[test]
    fn negative_stored_amount_is_a_data_error() {
        let tx = Transaction {
            id: "x".into(),
            name: "bad".into(),
            amount: dec("-1"),
            kind: TransactionKind::Negative,
            category: "food".into(),
            date: at("2023-01-05T12:00:00Z"),
        };
        assert!(matches!(
            format_transaction(&tx, Locale::PtBr, &Utc),
            Err(FormatError::NegativeAmount { .. })
        ));
    }
}
