// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{category_breakdown, total, window_expenses, CategoryTotal};
use crate::categories::CATEGORIES;
use crate::context::AppContext;
use crate::format::{format_currency, format_month_year};
use crate::models::ReportWindow;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    #[serde(flatten)]
    pub category: CategoryTotal,
    pub total_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeView {
    pub window: ReportWindow,
    pub title: String,
    pub window_total: Decimal,
    pub categories: Vec<CategoryRow>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResumeState {
    Loading,
    Ready(ResumeView),
}

/// Spend by category for one selected month.
pub struct Resume<'c, 'a, Tz: TimeZone = chrono::Local> {
    ctx: &'c AppContext<'a, Tz>,
    window: ReportWindow,
    state: ResumeState,
}

impl<'c, 'a, Tz: TimeZone> Resume<'c, 'a, Tz> {
    /// Starts on the month containing `now`.
    pub fn new(ctx: &'c AppContext<'a, Tz>, now: DateTime<Utc>) -> Self {
        let window = ReportWindow::containing(&now, &ctx.tz);
        Self::at(ctx, window)
    }

    pub fn at(ctx: &'c AppContext<'a, Tz>, window: ReportWindow) -> Self {
        Resume {
            ctx,
            window,
            state: ResumeState::Loading,
        }
    }

    pub fn window(&self) -> ReportWindow {
        self.window
    }

    pub fn state(&self) -> &ResumeState {
        &self.state
    }

    pub fn view(&self) -> Option<&ResumeView> {
        match &self.state {
            ResumeState::Ready(v) => Some(v),
            ResumeState::Loading => None,
        }
    }

    pub fn next_month(&mut self) {
        self.window = self.window.next();
        self.refresh()
    }

    pub fn prev_month(&mut self) {
        self.window = self.window.prev();
        self.refresh()
    }

    /// Reload from storage for the selected month.
    pub fn refresh(&mut self) {
        self.state = ResumeState::Loading;
        let (txs, notice) = match self.ctx.transactions().load(&self.ctx.user.id) {
            Ok(txs) => (txs, None),
            Err(e) => {
                tracing::warn!(user_id = %self.ctx.user.id, error = %e, "could not read transactions");
                (Vec::new(), Some(e.to_string()))
            }
        };

        let tz = &self.ctx.tz;
        let locale = self.ctx.locale;
        let window_total = total(window_expenses(&txs, &self.window, tz));
        let categories = category_breakdown(&txs, &self.window, CATEGORIES, tz)
            .into_iter()
            .map(|c| CategoryRow {
                total_formatted: format_currency(c.total, locale),
                category: c,
            })
            .collect();
        tracing::debug!(window = %self.window, %window_total, "resume refreshed");

        self.state = ResumeState::Ready(ResumeView {
            window: self.window,
            title: format_month_year(&self.window, locale),
            window_total,
            categories,
            notice,
        });
    }
}
