// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{DB_ENV, OWNER_ENV};
use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn name_arg() -> Arg {
    Arg::new("name").long("name").required(true)
}

pub fn build_cli() -> Command {
    Command::new("midinero")
        .about("Mi Dinero: envelope budgeting from the terminal")
        .version(clap::crate_version!())
        .arg(
            Arg::new("owner")
                .long("owner")
                .global(true)
                .env(OWNER_ENV)
                .help("Owner whose records are read and written"),
        )
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .help("Path to the SQLite database"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account with an optional starting balance")
                        .arg(name_arg())
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .allow_hyphen_values(true)
                                .help("Opening balance; blank means zero"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List accounts with balances"),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(Command::new("add").about("Add a category").arg(name_arg()))
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an outflow (default) or an inflow")
                        .arg(Arg::new("payee").long("payee").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .help("Defaults to the first account"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Required for outflows, ignored for inflows"),
                        )
                        .arg(
                            Arg::new("inflow")
                                .long("inflow")
                                .action(ArgAction::SetTrue)
                                .help("Money in; goes to Ready to Assign"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("account").long("account"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(u64).range(1..))
                                .help("Show at most this many rows"),
                        ),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Assign money to categories")
                .subcommand(
                    Command::new("assign")
                        .about("Set the amount assigned to a category for a month")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Ready to Assign and per-category availability")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("YYYY-MM, defaults to the current month"),
                        ),
                )),
        )
        .subcommand(Command::new("manage").about("Accounts with balances and categories"))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export transactions to CSV or JSON")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check data for inconsistencies"))
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show").about("Show the resolved configuration"))
                .subcommand(
                    Command::new("set-owner")
                        .about("Store the default owner")
                        .arg(Arg::new("name").required(true)),
                ),
        )
}
