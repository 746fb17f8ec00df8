// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::{Direction, TransactionDraft};
use crate::ledger::{AccountFilter, filter_transactions};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::collections::HashMap;

pub const READY_TO_ASSIGN: &str = "Ready to Assign";

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn draft_from_args(store: &Store, sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let direction = if sub.get_flag("inflow") {
        Direction::Inflow
    } else {
        Direction::Outflow
    };
    let account_id = match sub.get_one::<String>("account") {
        Some(name) => Some(store.account_by_name(name)?.id),
        None => store.accounts()?.first().map(|a| a.id),
    };
    let category_id = match (direction, sub.get_one::<String>("category")) {
        (Direction::Outflow, Some(name)) => Some(store.category_by_name(name)?.id),
        _ => None,
    };
    let date = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    Ok(TransactionDraft {
        payee: sub.get_one::<String>("payee").cloned().unwrap_or_default(),
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        date,
        account_id,
        category_id,
        direction,
    })
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let new = draft_from_args(store, sub)?.validate()?;
    let t = store
        .create_transaction(&new)
        .context("Could not save transaction")?;
    tracing::info!(owner = store.owner(), id = t.id, "transaction recorded");
    println!(
        "Recorded {} on {} at '{}'",
        fmt_money(&t.amount),
        t.local_date(),
        t.payee
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(store, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No transactions yet.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.account.clone(),
                    r.payee.clone(),
                    r.category.clone(),
                    fmt_money(&r.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Account", "Payee", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub account: String,
    pub payee: String,
    pub category: String,
    pub amount: rust_decimal::Decimal,
}

/// Transactions for the list view, newest first, with account and category
/// names joined in.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = match sub.get_one::<String>("account") {
        Some(name) => AccountFilter::Account(store.account_by_name(name)?.id),
        None => AccountFilter::All,
    };
    let limit = sub
        .get_one::<u64>("limit")
        .map(|&n| usize::try_from(n).unwrap_or(usize::MAX));
    collect_rows(store, filter, limit)
}

pub fn collect_rows(
    store: &Store,
    filter: AccountFilter,
    limit: Option<usize>,
) -> Result<Vec<TransactionRow>> {
    let accounts: HashMap<i64, String> = store
        .accounts()?
        .into_iter()
        .map(|a| (a.id, a.name))
        .collect();
    let categories: HashMap<i64, String> = store
        .categories()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let transactions = store.transactions()?;

    Ok(filter_transactions(&transactions, filter)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|t| TransactionRow {
            id: t.id,
            date: t.local_date().to_string(),
            account: accounts.get(&t.account_id).cloned().unwrap_or_default(),
            payee: t.payee.clone(),
            category: t
                .category_id
                .and_then(|id| categories.get(&id).cloned())
                .unwrap_or_else(|| READY_TO_ASSIGN.to_string()),
            amount: t.amount,
        })
        .collect())
}
