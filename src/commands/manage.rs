// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{AccountBalance, account_balances};
use crate::store::Store;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;

pub const NO_ACCOUNTS_HINT: &str = "No accounts yet. Add one to get started!";
pub const NO_CATEGORIES_HINT: &str = "No categories yet. Add some to build your budget.";

/// Accounts with their balances and category names, in name order.
#[derive(Debug, Clone, PartialEq)]
pub struct ManageView {
    pub accounts: Vec<AccountBalance>,
    pub categories: Vec<String>,
}

pub fn manage_view(store: &Store) -> Result<ManageView> {
    let accounts = store.accounts()?;
    let transactions = store.transactions()?;
    Ok(ManageView {
        accounts: account_balances(&accounts, &transactions),
        categories: store.categories()?.into_iter().map(|c| c.name).collect(),
    })
}

/// Printable lines; an empty section shows its hint instead of a table.
pub fn render(view: &ManageView) -> Vec<String> {
    let mut lines = vec!["Accounts".to_string()];
    if view.accounts.is_empty() {
        lines.push(NO_ACCOUNTS_HINT.to_string());
    } else {
        let rows = view
            .accounts
            .iter()
            .map(|b| vec![b.name.clone(), fmt_money(&b.balance)])
            .collect();
        lines.push(pretty_table(&["Account", "Balance"], rows).to_string());
    }

    lines.push(String::new());
    lines.push("Categories".to_string());
    if view.categories.is_empty() {
        lines.push(NO_CATEGORIES_HINT.to_string());
    } else {
        let rows = view.categories.iter().map(|c| vec![c.clone()]).collect();
        lines.push(pretty_table(&["Category"], rows).to_string());
    }
    lines
}

pub fn handle(store: &Store) -> Result<()> {
    for line in render(&manage_view(store)?) {
        println!("{}", line);
    }
    Ok(())
}
