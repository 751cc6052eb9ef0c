//! MCP session state.
//!
//! Owns the database handle and the insight memo. The session is constructed
//! once at startup and injected into the server, so tests can drive the
//! dispatch layer with a session of their own.

use crate::db::Database;
use crate::memo::InsightMemo;

/// Process-wide session: the database handle plus the only mutable state,
/// the insight memo.
pub struct McpSession {
    /// Database handle; connects per statement
    db: Database,
    /// Append-only insight log backing `memo://insights`
    memo: InsightMemo,
}

impl McpSession {
    /// Create a session for the given database with an empty memo.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            memo: InsightMemo::new(),
        }
    }

    /// Get the database handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Get the insight memo.
    pub fn memo(&self) -> &InsightMemo {
        &self.memo
    }

    /// Get the insight memo for mutation.
    pub fn memo_mut(&mut self) -> &mut InsightMemo {
        &mut self.memo
    }
}
