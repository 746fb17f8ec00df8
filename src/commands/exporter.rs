// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::collect_rows;
use crate::ledger::AccountFilter;
use crate::store::Store;
use anyhow::{Context, Result, bail};
use serde_json::json;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = sub.get_one::<String>("out").map(|s| s.trim()).unwrap_or_default();

    // Oldest first in exports.
    let mut rows = collect_rows(store, AccountFilter::All, None)?;
    rows.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(["date", "account", "payee", "amount", "category"])?;
            for r in &rows {
                wtr.write_record([
                    r.date.as_str(),
                    r.account.as_str(),
                    r.payee.as_str(),
                    r.amount.to_string().as_str(),
                    r.category.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|r| {
                    json!({
                        "date": r.date, "account": r.account, "payee": r.payee,
                        "amount": r.amount.to_string(), "category": r.category
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    tracing::info!(owner = store.owner(), count = rows.len(), path = out, "exported");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
