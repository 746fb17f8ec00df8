// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input drafts checked before anything touches the database.

use crate::error::{BudgetError, BudgetResult};
use crate::ledger::Period;
use crate::models::NewTransaction;
use crate::utils::local_midnight_utc;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const MISSING_FIELDS: &str = "Please fill all required fields.";
pub const OUTFLOW_NEEDS_CATEGORY: &str = "Please select a category for outflows.";
pub const STARTING_BALANCE_PAYEE: &str = "Starting Balance";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Outflow,
    Inflow,
}

/// Raw transaction input. The amount is entered unsigned; `direction` picks the sign.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub payee: String,
    pub amount: String,
    /// `YYYY-MM-DD`, interpreted as local midnight.
    pub date: String,
    pub account_id: Option<i64>,
    pub category_id: Option<i64>,
    pub direction: Direction,
}

impl TransactionDraft {
    pub fn validate(&self) -> BudgetResult<NewTransaction> {
        let payee = self.payee.trim();
        let amount = parse_amount(&self.amount);
        let (Some(amount), Some(account_id)) = (amount, self.account_id) else {
            return Err(BudgetError::validation(MISSING_FIELDS));
        };
        if payee.is_empty() {
            return Err(BudgetError::validation(MISSING_FIELDS));
        }
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(BudgetError::validation(
                "Amount must not be negative; choose inflow or outflow instead.",
            ));
        }
        check_amount(amount)?;
        let category_id = match self.direction {
            Direction::Outflow => {
                Some(self.category_id.ok_or_else(|| BudgetError::validation(OUTFLOW_NEEDS_CATEGORY))?)
            }
            // Inflows always go to Ready to Assign.
            Direction::Inflow => None,
        };
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            BudgetError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", self.date))
        })?;

        let amount = match self.direction {
            Direction::Outflow => -amount,
            Direction::Inflow => amount,
        };
        Ok(NewTransaction {
            date: local_midnight_utc(date),
            payee: payee.to_string(),
            amount,
            account_id,
            category_id,
        })
    }
}

/// New account with an optional opening balance (blank means zero).
#[derive(Debug, Clone, Default)]
pub struct AccountDraft {
    pub name: String,
    pub starting_balance: String,
}

impl AccountDraft {
    pub fn validate(&self) -> BudgetResult<(String, Decimal)> {
        let name = required_name(&self.name, "Account")?;
        let balance = if self.starting_balance.trim().is_empty() {
            Decimal::ZERO
        } else {
            let balance = parse_amount(&self.starting_balance).ok_or_else(|| {
                BudgetError::validation(format!(
                    "Invalid starting balance '{}'",
                    self.starting_balance.trim()
                ))
            })?;
            check_amount(balance)?
        };
        Ok((name, balance))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn validate(&self) -> BudgetResult<String> {
        required_name(&self.name, "Category")
    }
}

#[derive(Debug, Clone, Default)]
pub struct BudgetDraft {
    pub month: String,
    pub amount: String,
}

impl BudgetDraft {
    pub fn validate(&self) -> BudgetResult<(Period, Decimal)> {
        let period = Period::parse(&self.month)?;
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| BudgetError::validation(format!("Invalid amount '{}'", self.amount.trim())))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(BudgetError::validation("Assigned amount must not be negative"));
        }
        check_amount(amount)?;
        Ok((period, amount))
    }
}

/// Largest magnitude accepted for a single amount. Sums over any realistic
/// number of rows stay far below `Decimal::MAX`.
pub fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000_000i64)
}

/// Rejects amounts above `max_amount()` or with more than two decimal places.
pub fn check_amount(amount: Decimal) -> BudgetResult<Decimal> {
    if amount.abs() > max_amount() {
        return Err(BudgetError::validation(format!(
            "Amount {} exceeds the maximum of {}",
            amount,
            max_amount()
        )));
    }
    if amount.normalize().scale() > 2 {
        return Err(BudgetError::validation(format!(
            "Amount {} has more than two decimal places",
            amount
        )));
    }
    Ok(amount)
}

fn parse_amount(s: &str) -> Option<Decimal> {
    s.trim().parse::<Decimal>().ok()
}

fn required_name(raw: &str, entity: &str) -> BudgetResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(BudgetError::validation(format!("{} name is required", entity)));
    }
    Ok(name.to_string())
}
