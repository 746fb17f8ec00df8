// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::AccountDraft;
use crate::ledger::account_balances;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use chrono::Utc;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let draft = AccountDraft {
        name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
        starting_balance: sub.get_one::<String>("balance").cloned().unwrap_or_default(),
    };
    let (name, balance) = draft.validate()?;
    let account = store
        .create_account_with_balance(&name, balance, Utc::now())
        .context("Could not create account")?;
    tracing::info!(owner = store.owner(), id = account.id, "account added");
    if balance.is_zero() {
        println!("Added account '{}'", account.name);
    } else {
        println!(
            "Added account '{}' with starting balance {}",
            account.name,
            fmt_money(&balance)
        );
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let accounts = store.accounts()?;
    let transactions = store.transactions()?;
    let balances = account_balances(&accounts, &transactions);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &balances)? {
        let rows = balances
            .iter()
            .map(|b| vec![b.name.clone(), fmt_money(&b.balance)])
            .collect();
        println!("{}", pretty_table(&["Account", "Balance"], rows));
    }
    Ok(())
}
