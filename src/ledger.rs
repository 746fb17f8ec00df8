// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived state. Nothing here is persisted: balances, availability and the
//! Ready to Assign pool are recomputed from the collections on every view.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Account, Category, MonthlyBudget, Transaction};
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A budgeting month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> BudgetResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(BudgetError::validation(format!(
                "Invalid month number {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Parses `YYYY-MM`.
    pub fn parse(s: &str) -> BudgetResult<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| BudgetError::validation(format!("Invalid month '{}', expected YYYY-MM", s)))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFilter {
    All,
    Account(i64),
}

impl AccountFilter {
    fn matches(&self, t: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Account(id) => t.account_id == *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalance {
    pub account_id: i64,
    pub name: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    pub category_id: i64,
    pub name: String,
    pub assigned: Decimal,
    pub spent: Decimal,
    pub available: Decimal,
}

pub fn account_balance(transactions: &[Transaction], account_id: i64) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .map(|t| t.amount)
        .sum()
}

pub fn account_balances(accounts: &[Account], transactions: &[Transaction]) -> Vec<AccountBalance> {
    accounts
        .iter()
        .map(|a| AccountBalance {
            account_id: a.id,
            name: a.name.clone(),
            balance: account_balance(transactions, a.id),
        })
        .collect()
}

/// Total assigned to a category for a month. Duplicate entries are summed.
pub fn assigned_for(budgets: &[MonthlyBudget], category_id: i64, period: Period) -> Decimal {
    budgets
        .iter()
        .filter(|b| b.category_id == category_id && b.year == period.year && b.month == period.month)
        .map(|b| b.assigned)
        .sum()
}

/// Magnitude of outflows charged to a category during a month.
pub fn spent_in(transactions: &[Transaction], category_id: i64, period: Period) -> Decimal {
    transactions
        .iter()
        .filter(|t| {
            t.is_outflow() && t.category_id == Some(category_id) && period.contains(t.local_date())
        })
        .map(|t| -t.amount)
        .sum()
}

pub fn category_available(
    budgets: &[MonthlyBudget],
    transactions: &[Transaction],
    category_id: i64,
    period: Period,
) -> Decimal {
    assigned_for(budgets, category_id, period) - spent_in(transactions, category_id, period)
}

/// Uncategorized inflows minus everything assigned, across all months.
pub fn ready_to_assign(transactions: &[Transaction], budgets: &[MonthlyBudget]) -> Decimal {
    let inflows: Decimal = transactions
        .iter()
        .filter(|t| t.is_inflow() && t.category_id.is_none())
        .map(|t| t.amount)
        .sum();
    let assigned: Decimal = budgets.iter().map(|b| b.assigned).sum();
    inflows - assigned
}

pub fn budget_rows(
    categories: &[Category],
    budgets: &[MonthlyBudget],
    transactions: &[Transaction],
    period: Period,
) -> Vec<BudgetRow> {
    categories
        .iter()
        .map(|c| {
            let assigned = assigned_for(budgets, c.id, period);
            let spent = spent_in(transactions, c.id, period);
            BudgetRow {
                category_id: c.id,
                name: c.name.clone(),
                assigned,
                spent,
                available: assigned - spent,
            }
        })
        .collect()
}

/// Most recent first; equal timestamps fall back to insertion order, newest first.
pub fn filter_transactions(transactions: &[Transaction], filter: AccountFilter) -> Vec<&Transaction> {
    let mut out: Vec<&Transaction> = transactions.iter().filter(|t| filter.matches(t)).collect();
    out.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    out
}
