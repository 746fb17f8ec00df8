// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use midinero::store::Store;
use midinero::{cli, commands, config, db, logging};

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    logging::init(matches.get_flag("verbose"));
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p.trim()),
        None => db::db_path()?,
    };
    let conn = db::open_or_init(&path)?;
    let (owner, source) =
        config::resolve_owner(&conn, matches.get_one::<String>("owner").map(String::as_str))?;
    tracing::debug!(%owner, ?source, "owner resolved");
    let store = Store::new(&conn, owner.clone());

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("account", sub)) => commands::accounts::handle(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, sub)?,
        Some(("manage", _)) => commands::manage::handle(&store)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        Some(("config", sub)) => commands::settings::handle(&conn, &path, &owner, source, sub)?,
        _ => commands::home::handle(&store)?,
    }
    Ok(())
}
