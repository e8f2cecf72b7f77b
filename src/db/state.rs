// src/db/state.rs
//
// Sqlite-backed implementation of the change-state store. One row per
// manifest key; the core decides what goes in, this only moves rows.

use rusqlite::{params, OptionalExtension};

use crate::db::connection::Database;
use crate::domain::{ChangeState, StateStore};
use crate::errors::MonitorError;

pub struct SqliteStateStore {
    db: Database,
}

impl SqliteStateStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl StateStore for SqliteStateStore {
    fn get(&self, key: &str) -> Result<Option<ChangeState>, MonitorError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT last_hash, update_count, first_seen, last_seen
                 FROM offload_state WHERE key = ?1",
                params![key],
                |row| {
                    Ok(ChangeState {
                        last_hash: row.get(0)?,
                        update_count: row.get(1)?,
                        first_seen: row.get(2)?,
                        last_seen: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(|e| MonitorError::Db(e.to_string()))
        })
    }

    fn put(&mut self, key: &str, state: &ChangeState) -> Result<(), MonitorError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO offload_state (key, last_hash, update_count, first_seen, last_seen)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(key) DO UPDATE SET
                     last_hash = excluded.last_hash,
                     update_count = excluded.update_count,
                     last_seen = excluded.last_seen",
                params![
                    key,
                    state.last_hash,
                    state.update_count,
                    state.first_seen,
                    state.last_seen
                ],
            )
            .map_err(|e| MonitorError::Db(e.to_string()))?;
            Ok(())
        })
    }
}
