// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use midinero::commands::doctor;
use midinero::ledger::Period;
use midinero::models::NewTransaction;
use midinero::store::Store;
use midinero::db;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn clean_data_has_no_findings() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    let c = store.create_category("Rent").unwrap();
    store
        .assign_budget(c.id, Period::new(2025, 1).unwrap(), Decimal::from(900))
        .unwrap();
    store
        .create_account_with_balance("Checking", Decimal::from(100), Utc::now())
        .unwrap();
    assert!(doctor::findings(&store).unwrap().is_empty());
}

#[test]
fn reports_duplicate_budget_entries() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    let c = store.create_category("Rent").unwrap();
    for amt in ["900", "100"] {
        conn.execute(
            "INSERT INTO monthly_budgets(owner, category_id, year, month, assigned)
             VALUES ('ana', ?1, 2025, 2, ?2)",
            params![c.id, amt],
        )
        .unwrap();
    }
    let found = doctor::findings(&store).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].issue, "duplicate_monthly_budget");
    assert_eq!(found[0].detail, "Rent 2025-02 (2 entries)");

    // Another owner's data is not inspected.
    assert!(doctor::findings(&Store::new(&conn, "ben")).unwrap().is_empty());
}

#[test]
fn negative_starting_balance_is_not_a_finding() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    store
        .create_account_with_balance("Card", Decimal::from(-50), Utc::now())
        .unwrap();
    assert!(doctor::findings(&store).unwrap().is_empty());
}

#[test]
fn reports_uncategorized_outflows() {
    let conn = setup();
    let store = Store::new(&conn, "ana");
    let card = store
        .create_account_with_balance("Card", Decimal::from(-50), Utc::now())
        .unwrap();
    store
        .create_transaction(&NewTransaction {
            date: Utc::now(),
            payee: "Corner Shop".into(),
            amount: Decimal::from(-12),
            account_id: card.id,
            category_id: None,
        })
        .unwrap();
    let found = doctor::findings(&store).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].issue, "uncategorized_outflow");
    assert!(found[0].detail.contains("Corner Shop"));
    assert!(found[0].detail.contains("-$12.00"));
}
