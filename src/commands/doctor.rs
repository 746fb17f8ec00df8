// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::STARTING_BALANCE_PAYEE;
use crate::ledger::Period;
use crate::store::Store;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub issue: &'static str,
    pub detail: String,
}

pub fn findings(store: &Store) -> Result<Vec<Finding>> {
    let mut out = Vec::new();
    let names: HashMap<i64, String> = store
        .categories()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    // 1) More than one budget entry for the same category and month
    let mut counts: BTreeMap<(i64, i32, u32), usize> = BTreeMap::new();
    for b in store.monthly_budgets()? {
        *counts.entry((b.category_id, b.year, b.month)).or_default() += 1;
    }
    for ((cid, year, month), n) in counts {
        if n > 1 {
            let period = Period { year, month };
            let name = names.get(&cid).cloned().unwrap_or_else(|| cid.to_string());
            out.push(Finding {
                issue: "duplicate_monthly_budget",
                detail: format!("{} {} ({} entries)", name, period, n),
            });
        }
    }

    // 2) Outflows that no category pays for. A negative opening balance is
    //    recorded uncategorized and is not one of them.
    for t in store.transactions()? {
        if t.is_outflow() && t.category_id.is_none() && t.payee != STARTING_BALANCE_PAYEE {
            out.push(Finding {
                issue: "uncategorized_outflow",
                detail: format!("{} {} {}", t.local_date(), t.payee, fmt_money(&t.amount)),
            });
        }
    }
    Ok(out)
}

pub fn handle(store: &Store) -> Result<()> {
    let found = findings(store)?;
    if found.is_empty() {
        println!("doctor: no issues found");
        return Ok(());
    }
    for f in &found {
        tracing::warn!(issue = f.issue, detail = %f.detail, "doctor finding");
    }
    let rows = found
        .into_iter()
        .map(|f| vec![f.issue.to_string(), f.detail])
        .collect();
    println!("{}", pretty_table(&["Issue", "Detail"], rows));
    Ok(())
}
