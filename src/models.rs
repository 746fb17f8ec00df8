// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub id: i64,
    pub owner: String,
    pub category_id: i64,
    pub year: i32,
    pub month: u32, // 1 = January
    pub assigned: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub owner: String,
    pub date: DateTime<Utc>,
    pub payee: String,
    /// Positive for inflows, negative for outflows.
    pub amount: Decimal,
    pub account_id: i64,
    /// `None` means the money lands in Ready to Assign.
    pub category_id: Option<i64>,
}

impl Transaction {
    pub fn is_inflow(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_outflow(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Calendar date of the transaction in the local timezone.
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}

/// Validated input for a transaction insert. Ownership is added by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: DateTime<Utc>,
    pub payee: String,
    pub amount: Decimal,
    pub account_id: i64,
    pub category_id: Option<i64>,
}
