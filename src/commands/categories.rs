// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::CategoryDraft;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let draft = CategoryDraft {
                name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
            };
            let name = draft.validate()?;
            let category = store
                .create_category(&name)
                .context("Could not create category")?;
            tracing::info!(owner = store.owner(), id = category.id, "category added");
            println!("Added category '{}'", category.name);
        }
        Some(("list", sub)) => {
            let categories = store.categories()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &categories)? {
                let data = categories.into_iter().map(|c| vec![c.name]).collect();
                println!("{}", pretty_table(&["Category"], data));
            }
        }
        _ => {}
    }
    Ok(())
}
