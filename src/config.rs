// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

pub const OWNER_ENV: &str = "MIDINERO_OWNER";
pub const DB_ENV: &str = "MIDINERO_DB";
pub const LOG_ENV: &str = "MIDINERO_LOG";
pub const DEFAULT_OWNER: &str = "local";

const OWNER_KEY: &str = "owner";

/// Where the active owner identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerSource {
    /// `--owner` flag or `MIDINERO_OWNER`.
    Explicit,
    Settings,
    OsUser,
    Default,
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_default_owner(conn: &Connection) -> Result<Option<String>> {
    get_setting(conn, OWNER_KEY)
}

pub fn set_default_owner(conn: &Connection, owner: &str) -> Result<()> {
    let owner = owner.trim();
    if owner.is_empty() {
        anyhow::bail!("Owner must not be blank");
    }
    set_setting(conn, OWNER_KEY, owner)
}

/// Picks the owner: explicit value, then the stored default, then the OS user.
/// clap already folds `MIDINERO_OWNER` into `explicit`.
pub fn resolve_owner(conn: &Connection, explicit: Option<&str>) -> Result<(String, OwnerSource)> {
    if let Some(o) = explicit.map(str::trim).filter(|o| !o.is_empty()) {
        return Ok((o.to_string(), OwnerSource::Explicit));
    }
    if let Some(o) = get_default_owner(conn)? {
        return Ok((o, OwnerSource::Settings));
    }
    let os_user = ["USER", "USERNAME"]
        .iter()
        .filter_map(|k| std::env::var(k).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty());
    Ok(match os_user {
        Some(u) => (u, OwnerSource::OsUser),
        None => (DEFAULT_OWNER.to_string(), OwnerSource::Default),
    })
}
