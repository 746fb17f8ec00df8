// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::budgets::{BudgetView, budget_view, print_view};
use crate::commands::manage::{ManageView, manage_view, render};
use crate::ledger::Period;
use crate::store::Store;
use anyhow::Result;

/// What a bare `midinero` invocation shows.
#[derive(Debug)]
pub enum View {
    Manage(ManageView),
    Budget(BudgetView),
}

/// New owners land on the manage view until they have an account; after
/// that the budget for `period` is shown.
pub fn default_view(store: &Store, period: Period) -> Result<View> {
    if store.accounts()?.is_empty() {
        Ok(View::Manage(manage_view(store)?))
    } else {
        Ok(View::Budget(budget_view(store, period)?))
    }
}

pub fn handle(store: &Store) -> Result<()> {
    match default_view(store, Period::current())? {
        View::Manage(view) => {
            for line in render(&view) {
                println!("{}", line);
            }
        }
        View::Budget(view) => print_view(&view),
    }
    Ok(())
}
