// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

/// Midnight of `date` in the local timezone, as a UTC instant.
///
/// Where a DST gap swallows midnight the first valid hour of the day is used.
pub fn local_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    for hour in 0..3 {
        let Some(naive) = date.and_hms_opt(hour, 0, 0) else {
            continue;
        };
        if let Some(local) = Local.from_local_datetime(&naive).earliest() {
            return local.with_timezone(&Utc);
        }
    }
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Storage form of a timestamp: RFC 3339, whole seconds, `Z` suffix.
pub fn fmt_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid timestamp '{}'", s))?
        .with_timezone(&Utc))
}

pub fn fmt_money(d: &Decimal) -> String {
    let v = d.round_dp(2);
    if v.is_sign_negative() && !v.is_zero() {
        format!("-${:.2}", v.abs())
    } else {
        format!("${:.2}", v.abs())
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
