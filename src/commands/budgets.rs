// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::manage::NO_CATEGORIES_HINT;
use crate::form::BudgetDraft;
use crate::ledger::{BudgetRow, Period, budget_rows, ready_to_assign};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("assign", sub)) => assign(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn assign(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let draft = BudgetDraft {
        month: sub.get_one::<String>("month").cloned().unwrap_or_default(),
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
    };
    let (period, amount) = draft.validate()?;
    let cat = sub.get_one::<String>("category").cloned().unwrap_or_default();
    let category = store.category_by_name(&cat)?;
    store
        .assign_budget(category.id, period, amount)
        .context("Could not assign budget")?;
    tracing::info!(owner = store.owner(), %period, category = %category.name, "budget assigned");
    println!(
        "Assigned {} to {} for {}",
        fmt_money(&amount),
        category.name,
        period
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BudgetView {
    pub period: String,
    pub ready_to_assign: Decimal,
    pub categories: Vec<BudgetRow>,
}

pub fn budget_view(store: &Store, period: Period) -> Result<BudgetView> {
    let categories = store.categories()?;
    let budgets = store.monthly_budgets()?;
    let transactions = store.transactions()?;
    Ok(BudgetView {
        period: period.to_string(),
        ready_to_assign: ready_to_assign(&transactions, &budgets),
        categories: budget_rows(&categories, &budgets, &transactions, period),
    })
}

pub fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let period = match sub.get_one::<String>("month") {
        Some(m) => Period::parse(m)?,
        None => Period::current(),
    };
    let view = budget_view(store, period)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    print_view(&view);
    Ok(())
}

pub fn print_view(view: &BudgetView) {
    println!("Ready to Assign: {}", fmt_money(&view.ready_to_assign));
    println!();
    println!("Budget {}", view.period);
    if view.categories.is_empty() {
        println!("{}", NO_CATEGORIES_HINT);
        return;
    }
    let rows = view
        .categories
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                fmt_money(&r.assigned),
                fmt_money(&r.available),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Assigned", "Available"], rows)
    );
}
