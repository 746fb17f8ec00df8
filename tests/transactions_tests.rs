// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use midinero::commands::transactions::{self, READY_TO_ASSIGN};
use midinero::store::Store;
use midinero::{cli, db};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    {
        let store = Store::new(&conn, "ana");
        store.create_account("Checking").unwrap();
        store.create_account("Savings").unwrap();
        store.create_category("Groceries").unwrap();
    }
    conn
}

fn run(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["midinero", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => transactions::handle(store, tx_m),
        _ => panic!("no tx subcommand"),
    }
}

fn list(store: &Store, args: &[&str]) -> Vec<transactions::TransactionRow> {
    let mut argv = vec!["midinero", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    transactions::query_rows(store, list_m).unwrap()
}

#[test]
fn add_outflow_and_inflow() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    run(
        &store,
        &[
            "add", "--payee", "Supermarket", "--amount", "42.10", "--date", "2025-06-01",
            "--account", "Checking", "--category", "Groceries",
        ],
    )
    .unwrap();
    run(
        &store,
        &[
            "add", "--payee", "Employer", "--amount", "2000", "--date", "2025-06-02",
            "--account", "Checking", "--category", "Groceries", "--inflow",
        ],
    )
    .unwrap();

    let rows = list(&store, &[]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].payee, "Employer");
    assert_eq!(rows[0].amount, Decimal::from(2000));
    assert_eq!(rows[0].category, READY_TO_ASSIGN);
    assert_eq!(rows[1].amount, Decimal::from_str_exact("-42.10").unwrap());
    assert_eq!(rows[1].category, "Groceries");
    assert_eq!(rows[1].date, "2025-06-01");
    assert_eq!(rows[1].account, "Checking");
}

#[test]
fn outflow_without_category_is_refused() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    let err = run(
        &store,
        &["add", "--payee", "Cafe", "--amount", "3.50", "--account", "Checking"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("category for outflows"));
    assert!(store.transactions().unwrap().is_empty());
}

#[test]
fn account_defaults_to_first_by_name() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    run(
        &store,
        &["add", "--payee", "Gift", "--amount", "50", "--inflow", "--date", "2025-06-03"],
    )
    .unwrap();
    let rows = list(&store, &[]);
    assert_eq!(rows[0].account, "Checking");
}

#[test]
fn no_accounts_means_missing_fields() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let store = Store::new(&conn, "ana");
    let err = run(&store, &["add", "--payee", "Gift", "--amount", "50", "--inflow"]).unwrap_err();
    assert!(err.to_string().contains("Please fill all required fields."));
}

#[test]
fn unknown_account_is_not_found() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    let err = run(
        &store,
        &["add", "--payee", "Gift", "--amount", "50", "--inflow", "--account", "Nope"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Account 'Nope' not found"));
}

#[test]
fn list_filters_by_account_and_limits() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    for (day, acct) in [
        ("2025-01-01", "Checking"),
        ("2025-01-02", "Savings"),
        ("2025-01-03", "Checking"),
        ("2025-01-04", "Checking"),
    ] {
        run(
            &store,
            &[
                "add", "--payee", "P", "--amount", "1", "--inflow", "--date", day, "--account",
                acct,
            ],
        )
        .unwrap();
    }

    let rows = list(&store, &["--limit", "2"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-04");
    assert_eq!(list(&store, &["--limit", "10"]).len(), 4);

    let savings = list(&store, &["--account", "Savings"]);
    assert_eq!(savings.len(), 1);
    assert_eq!(savings[0].date, "2025-01-02");

    let checking = list(&store, &["--account", "Checking"]);
    let dates: Vec<&str> = checking.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-01-04", "2025-01-03", "2025-01-01"]);
}

#[test]
fn list_limit_must_be_positive() {
    for bad in ["0", "-1", "lots"] {
        let res = cli::build_cli().try_get_matches_from([
            "midinero", "tx", "list", "--limit", bad,
        ]);
        assert!(res.is_err(), "--limit {} should be rejected", bad);
    }
    assert!(
        cli::build_cli()
            .try_get_matches_from(["midinero", "tx", "list", "--limit", "1"])
            .is_ok()
    );
}
