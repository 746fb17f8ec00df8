// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use midinero::commands::exporter;
use midinero::models::NewTransaction;
use midinero::store::Store;
use midinero::utils::local_midnight_utc;
use midinero::{cli, db};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let store = Store::new(&conn, "ana");
    let acct = store.create_account("Checking").unwrap();
    let cat = store.create_category("Dining").unwrap();
    for (day, amount, category) in [
        (2, "-12.5", Some(cat.id)),
        (1, "1000", None),
    ] {
        store
            .create_transaction(&NewTransaction {
                date: local_midnight_utc(NaiveDate::from_ymd_opt(2025, 8, day).unwrap()),
                payee: format!("Payee {}", day),
                amount: Decimal::from_str_exact(amount).unwrap(),
                account_id: acct.id,
                category_id: category,
            })
            .unwrap();
    }
    Store::new(&conn, "ben").create_account("Hidden").unwrap();
    conn
}

fn export(store: &Store, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "midinero",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    let Some(("export", m)) = matches.subcommand() else {
        panic!("export not parsed");
    };
    exporter::handle(store, m)
}

#[test]
fn export_csv_oldest_first() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.csv");
    export(&store, "csv", path.to_str().unwrap()).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["date", "account", "payee", "amount", "category"]
    );
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][0], "2025-08-01");
    assert_eq!(&records[0][3], "1000");
    assert_eq!(&records[0][4], "Ready to Assign");
    assert_eq!(&records[1][3], "-12.5");
    assert_eq!(&records[1][4], "Dining");
}

#[test]
fn export_json_is_owner_scoped() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.json");

    let ben = Store::new(&conn, "ben");
    export(&ben, "json", path.to_str().unwrap()).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 0);

    let ana = Store::new(&conn, "ana");
    export(&ana, "JSON", path.to_str().unwrap()).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["payee"], "Payee 2");
    assert_eq!(items[1]["amount"], "-12.5");
    assert_eq!(items[1]["account"], "Checking");
}

#[test]
fn export_unknown_format_fails() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.xml");
    let err = export(&store, "xml", path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
    assert!(!path.exists());
}
