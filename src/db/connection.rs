use rusqlite::Connection;
use std::cell::RefCell;

use crate::errors::MonitorError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slot, keyed by path: a handle for a different
// database on the same thread replaces the cached connection instead of
// silently reusing it.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides a mutable connection to the closure, opening it lazily
    /// on first use of this path in this thread.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, MonitorError>
    where
        F: FnOnce(&mut Connection) -> Result<T, MonitorError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = match slot.as_ref() {
                    Some((path, _)) => path != &self.path,
                    None => true,
                };
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| MonitorError::Db(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(MonitorError::Db("connection slot empty".into())),
                }
            })
            .map_err(|e| MonitorError::Db(format!("thread-local access failed: {e}")))?
    }

    /// Apply the embedded schema. Idempotent.
    pub fn init(&self) -> Result<(), MonitorError> {
        self.with_conn(|conn| {
            conn.execute_batch(SCHEMA_SQL)
                .map_err(|e| MonitorError::Db(format!("Failed to apply schema: {e}")))?;
            Ok(())
        })
    }
}
