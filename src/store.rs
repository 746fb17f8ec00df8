// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Owner-scoped data client. Every read filters on `owner` and every write
//! stamps it, so one owner's records are invisible to another.

use crate::error::{BudgetError, BudgetResult};
use crate::form::{STARTING_BALANCE_PAYEE, check_amount};
use crate::ledger::Period;
use crate::models::{Account, Category, MonthlyBudget, NewTransaction, Transaction};
use crate::utils::{fmt_timestamp, parse_timestamp};
use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

pub struct Store<'c> {
    conn: &'c Connection,
    owner: String,
}

impl<'c> Store<'c> {
    pub fn new(conn: &'c Connection, owner: impl Into<String>) -> Self {
        Self {
            conn,
            owner: owner.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn create_account(&self, name: &str) -> BudgetResult<Account> {
        insert_account(self.conn, &self.owner, name)
    }

    /// Creates the account and, for a non-zero balance, an uncategorized
    /// opening transaction. Both rows are written or neither is.
    pub fn create_account_with_balance(
        &self,
        name: &str,
        starting_balance: Decimal,
        at: DateTime<Utc>,
    ) -> BudgetResult<Account> {
        check_amount(starting_balance)?;
        let tx = self.conn.unchecked_transaction()?;
        let account = insert_account(&tx, &self.owner, name)?;
        if !starting_balance.is_zero() {
            insert_transaction(
                &tx,
                &self.owner,
                &NewTransaction {
                    date: at,
                    payee: STARTING_BALANCE_PAYEE.to_string(),
                    amount: starting_balance,
                    account_id: account.id,
                    category_id: None,
                },
            )?;
        }
        tx.commit()?;
        Ok(account)
    }

    pub fn create_category(&self, name: &str) -> BudgetResult<Category> {
        self.conn.execute(
            "INSERT INTO categories(owner, name) VALUES (?1, ?2)",
            params![self.owner, name],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(owner = %self.owner, id, "category created");
        Ok(Category {
            id,
            owner: self.owner.clone(),
            name: name.to_string(),
        })
    }

    pub fn create_transaction(&self, new: &NewTransaction) -> BudgetResult<Transaction> {
        check_amount(new.amount)?;
        self.require_account(new.account_id)?;
        if let Some(cid) = new.category_id {
            self.require_category(cid)?;
        }
        insert_transaction(self.conn, &self.owner, new)
    }

    /// Sets the amount assigned to a category for a month. The earliest
    /// existing entry for the month is updated; otherwise one is inserted.
    pub fn assign_budget(
        &self,
        category_id: i64,
        period: Period,
        assigned: Decimal,
    ) -> BudgetResult<MonthlyBudget> {
        check_amount(assigned)?;
        self.require_category(category_id)?;
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM monthly_budgets
                 WHERE owner=?1 AND category_id=?2 AND year=?3 AND month=?4
                 ORDER BY id LIMIT 1",
                params![self.owner, category_id, period.year, period.month],
                |r| r.get(0),
            )
            .optional()?;
        let id = match existing {
            Some(id) => {
                self.conn.execute(
                    "UPDATE monthly_budgets SET assigned=?1 WHERE id=?2",
                    params![assigned.to_string(), id],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO monthly_budgets(owner, category_id, year, month, assigned)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        self.owner,
                        category_id,
                        period.year,
                        period.month,
                        assigned.to_string()
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
        };
        tracing::debug!(owner = %self.owner, id, %period, %assigned, "budget assigned");
        Ok(MonthlyBudget {
            id,
            owner: self.owner.clone(),
            category_id,
            year: period.year,
            month: period.month,
            assigned,
        })
    }

    pub fn accounts(&self) -> BudgetResult<Vec<Account>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM accounts WHERE owner=?1 ORDER BY name, id")?;
        let rows = stmt.query_map(params![self.owner], |r| {
            Ok(Account {
                id: r.get(0)?,
                owner: self.owner.clone(),
                name: r.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn categories(&self) -> BudgetResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories WHERE owner=?1 ORDER BY name, id")?;
        let rows = stmt.query_map(params![self.owner], |r| {
            Ok(Category {
                id: r.get(0)?,
                owner: self.owner.clone(),
                name: r.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn monthly_budgets(&self) -> BudgetResult<Vec<MonthlyBudget>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category_id, year, month, assigned FROM monthly_budgets
             WHERE owner=?1 ORDER BY year, month, category_id, id",
        )?;
        let rows = stmt.query_map(params![self.owner], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, i64>(1)?,
                r.get::<_, i32>(2)?,
                r.get::<_, u32>(3)?,
                r.get::<_, String>(4)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, category_id, year, month, assigned) = row?;
            out.push(MonthlyBudget {
                id,
                owner: self.owner.clone(),
                category_id,
                year,
                month,
                assigned: decode_amount(&assigned)?,
            });
        }
        Ok(out)
    }

    /// Newest first.
    pub fn transactions(&self) -> BudgetResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, payee, amount, account_id, category_id FROM transactions
             WHERE owner=?1 ORDER BY date DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![self.owner], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, i64>(4)?,
                r.get::<_, Option<i64>>(5)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, date, payee, amount, account_id, category_id) = row?;
            out.push(Transaction {
                id,
                owner: self.owner.clone(),
                date: parse_timestamp(&date).map_err(|_| BudgetError::Corrupt {
                    field: "date",
                    value: date.clone(),
                })?,
                payee,
                amount: decode_amount(&amount)?,
                account_id,
                category_id,
            });
        }
        Ok(out)
    }

    pub fn account_by_name(&self, name: &str) -> BudgetResult<Account> {
        let name = name.trim();
        self.conn
            .query_row(
                "SELECT id, name FROM accounts WHERE owner=?1 AND name=?2 ORDER BY id LIMIT 1",
                params![self.owner, name],
                |r| {
                    Ok(Account {
                        id: r.get(0)?,
                        owner: self.owner.clone(),
                        name: r.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| BudgetError::account_not_found(name))
    }

    pub fn category_by_name(&self, name: &str) -> BudgetResult<Category> {
        let name = name.trim();
        self.conn
            .query_row(
                "SELECT id, name FROM categories WHERE owner=?1 AND name=?2 ORDER BY id LIMIT 1",
                params![self.owner, name],
                |r| {
                    Ok(Category {
                        id: r.get(0)?,
                        owner: self.owner.clone(),
                        name: r.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| BudgetError::category_not_found(name))
    }

    fn require_account(&self, id: i64) -> BudgetResult<()> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM accounts WHERE id=?1 AND owner=?2",
                params![id, self.owner],
                |r| r.get(0),
            )
            .optional()?;
        found.map(|_| ()).ok_or_else(|| BudgetError::account_not_found(id))
    }

    fn require_category(&self, id: i64) -> BudgetResult<()> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM categories WHERE id=?1 AND owner=?2",
                params![id, self.owner],
                |r| r.get(0),
            )
            .optional()?;
        found.map(|_| ()).ok_or_else(|| BudgetError::category_not_found(id))
    }
}

fn insert_account(conn: &Connection, owner: &str, name: &str) -> BudgetResult<Account> {
    conn.execute(
        "INSERT INTO accounts(owner, name) VALUES (?1, ?2)",
        params![owner, name],
    )?;
    let id = conn.last_insert_rowid();
    tracing::debug!(owner, id, "account created");
    Ok(Account {
        id,
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

fn insert_transaction(
    conn: &Connection,
    owner: &str,
    new: &NewTransaction,
) -> BudgetResult<Transaction> {
    conn.execute(
        "INSERT INTO transactions(owner, date, payee, amount, account_id, category_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            owner,
            fmt_timestamp(&new.date),
            new.payee,
            new.amount.to_string(),
            new.account_id,
            new.category_id
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::debug!(owner, id, amount = %new.amount, "transaction created");
    Ok(Transaction {
        id,
        owner: owner.to_string(),
        date: new.date.trunc_subsecs(0),
        payee: new.payee.clone(),
        amount: new.amount,
        account_id: new.account_id,
        category_id: new.category_id,
    })
}

fn decode_amount(s: &str) -> BudgetResult<Decimal> {
    s.parse::<Decimal>().map_err(|_| BudgetError::Corrupt {
        field: "amount",
        value: s.to_string(),
    })
}
