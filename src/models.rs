// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction. The stored amount is always a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Income, shown as an "entry".
    Positive,
    /// Outcome, shown as an "expense".
    Negative,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Positive => "positive",
            TransactionKind::Negative => "negative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "income" | "up" | "entry" => Some(TransactionKind::Positive),
            "negative" | "outcome" | "down" | "expense" => Some(TransactionKind::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// A calendar month used to scope the category report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportWindow {
    pub year: i32,
    pub month: u32, // 1..=12
}

impl ReportWindow {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(ReportWindow { year, month })
        } else {
            None
        }
    }

    /// The month containing `now` as seen from `tz`.
    pub fn containing<Tz: TimeZone>(now: &DateTime<Utc>, tz: &Tz) -> Self {
        let local = now.with_timezone(tz);
        ReportWindow {
            year: local.year(),
            month: local.month(),
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            ReportWindow {
                year: self.year + 1,
                month: 1,
            }
        } else {
            ReportWindow {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            ReportWindow {
                year: self.year - 1,
                month: 12,
            }
        } else {
            ReportWindow {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Month number and year equality in `tz`; the day is irrelevant.
    pub fn contains<Tz: TimeZone>(&self, at: &DateTime<Utc>, tz: &Tz) -> bool {
        let local = at.with_timezone(tz);
        local.month() == self.month && local.year() == self.year
    }
}

impl std::fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
