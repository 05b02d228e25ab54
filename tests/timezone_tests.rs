// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
    Weekday,
};
use gofinances::context::AppContext;
use gofinances::format::{format_day_month, Locale};
use gofinances::models::{ReportWindow, Transaction, TransactionKind, User};
use gofinances::screens::dashboard::Dashboard;
use gofinances::screens::resume::Resume;
use gofinances::storage::TransactionStore;
use rusqlite::Connection;
use std::fmt;

/// US Eastern time: UTC-5, or UTC-4 from the second Sunday of March to the
/// first Sunday of November.
#[derive(Debug, Clone, Copy)]
struct Eastern;

#[derive(Debug, Clone, Copy)]
struct EasternOffset(FixedOffset);

impl Offset for EasternOffset {
    fn fix(&self) -> FixedOffset {
        self.0
    }
}

impl fmt::Display for EasternOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn est() -> EasternOffset {
    EasternOffset(FixedOffset::west_opt(5 * 3600).unwrap())
}

fn edt() -> EasternOffset {
    EasternOffset(FixedOffset::west_opt(4 * 3600).unwrap())
}

fn sunday(year: i32, month: u32, n: u8) -> NaiveDate {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, n).unwrap()
}

impl TimeZone for Eastern {
    type Offset = EasternOffset;

    fn from_offset(_: &EasternOffset) -> Self {
        Eastern
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> EasternOffset {
        let year = utc.year();
        let start = sunday(year, 3, 2).and_hms_opt(7, 0, 0).unwrap();
        let end = sunday(year, 11, 1).and_hms_opt(6, 0, 0).unwrap();
        if *utc >= start && *utc < end { edt() } else { est() }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> EasternOffset {
        self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<EasternOffset> {
        let fits: Vec<EasternOffset> = [est(), edt()]
            .into_iter()
            .filter(|off| {
                let utc = *local - off.0;
                self.offset_from_utc_datetime(&utc).0 == off.0
            })
            .collect();
        match fits.as_slice() {
            [] => LocalResult::None,
            [one] => LocalResult::Single(*one),
            [a, b, ..] => LocalResult::Ambiguous(*a, *b),
        }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<EasternOffset> {
        self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
    }
}

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    gofinances::db::init_schema(&conn).unwrap();
    conn
}

fn user() -> User {
    User {
        id: "u1".into(),
        name: "Ana".into(),
        email: None,
        photo: None,
    }
}

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn seed(conn: &Connection, id: &str, kind: TransactionKind, date: &str) {
    TransactionStore::new(conn)
        .append(
            "u1",
            &Transaction {
                id: id.into(),
                name: "Dinner".into(),
                amount: "40".parse().unwrap(),
                kind,
                category: "food".into(),
                date: at(date),
            },
        )
        .unwrap();
}

#[test]
fn eastern_zone_switches_offset_with_the_season() {
    assert_eq!(Eastern.offset_from_utc_datetime(&at("2023-02-01T04:30:00Z").naive_utc()).fix(), est().0);
    assert_eq!(Eastern.offset_from_utc_datetime(&at("2023-07-01T04:30:00Z").naive_utc()).fix(), edt().0);
}

#[test]
fn winter_evening_expense_stays_in_its_month_when_viewed_in_summer() {
    let conn = setup();
    // 23:30 EST on 31 January
    seed(&conn, "a", TransactionKind::Negative, "2023-02-01T04:30:00Z");
    let ctx = AppContext::new(&conn, user(), Locale::EnUs, Eastern);

    let summer = at("2023-07-15T12:00:00Z");
    let mut resume = Resume::new(&ctx, summer);
    assert_eq!(resume.window(), ReportWindow::new(2023, 7).unwrap());

    let mut jan = Resume::at(&ctx, ReportWindow::new(2023, 1).unwrap());
    jan.refresh();
    assert_eq!(jan.view().unwrap().categories.len(), 1);

    let mut feb = Resume::at(&ctx, ReportWindow::new(2023, 2).unwrap());
    feb.refresh();
    assert!(feb.view().unwrap().categories.is_empty());

    resume.refresh();
    assert!(resume.view().unwrap().categories.is_empty());
}

#[test]
fn dashboard_dates_use_the_offset_of_each_record() {
    let conn = setup();
    seed(&conn, "a", TransactionKind::Negative, "2023-02-01T04:30:00Z");
    // 23:30 EDT on 31 July
    seed(&conn, "b", TransactionKind::Positive, "2023-08-01T03:30:00Z");
    let ctx = AppContext::new(&conn, user(), Locale::EnUs, Eastern);

    let mut dashboard = Dashboard::new(&ctx);
    dashboard.refresh().unwrap();
    let view = dashboard.view().unwrap();
    assert_eq!(view.expenses.last_transaction, "Last expense January 31");
    assert_eq!(view.entries.last_transaction, "Last entry July 31");
    let dates: Vec<_> = view.transactions.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, vec!["01/31/23", "07/31/23"]);

    assert_eq!(
        format_day_month(&at("2023-02-01T04:30:00Z"), Locale::PtBr, &Eastern),
        "31 de janeiro"
    );
}
