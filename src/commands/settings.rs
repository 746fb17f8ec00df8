// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{OwnerSource, set_default_owner};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub fn handle(
    conn: &Connection,
    db: &Path,
    owner: &str,
    source: OwnerSource,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let src = match source {
                OwnerSource::Explicit => "flag/env",
                OwnerSource::Settings => "settings",
                OwnerSource::OsUser => "os user",
                OwnerSource::Default => "default",
            };
            let rows = vec![
                vec!["database".into(), db.display().to_string()],
                vec!["owner".into(), format!("{} ({})", owner, src)],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-owner", sub)) => {
            let name = sub.get_one::<String>("name").cloned().unwrap_or_default();
            set_default_owner(conn, &name)?;
            tracing::info!(owner = name.trim(), "default owner stored");
            println!("Default owner set to '{}'", name.trim());
        }
        _ => {}
    }
    Ok(())
}
