//! Query execution against PostgreSQL.
//!
//! Each call opens a fresh connection, runs exactly one statement, and
//! disconnects before returning. There is no pooling and no statement
//! caching; the server handles one request at a time, so a private
//! connection per call keeps the executor free of cross-call state.

use sqlx::postgres::PgConnection;
use sqlx::Connection;
use tracing::{debug, error};

use crate::convert::row_to_json;
use crate::error::Result;

/// Statement prefixes routed through the write path (execute + commit).
const WRITE_PREFIXES: [&str; 6] = ["INSERT", "UPDATE", "DELETE", "CREATE", "DROP", "ALTER"];

/// Classify a statement as a write by prefix.
///
/// The statement is trimmed and upper-cased before the check; nothing is
/// parsed. A statement opening with a comment will therefore classify as a
/// read. This is the single seam where a stricter classifier would go.
pub fn is_write_statement(sql: &str) -> bool {
    let upper = sql.trim().to_uppercase();
    WRITE_PREFIXES.iter().any(|prefix| upper.starts_with(prefix))
}

/// Result of a single executed statement: rows for reads, an affected-row
/// count for writes. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Rows in driver-returned order, each column name mapped to a JSON value.
    Rows(Vec<serde_json::Map<String, serde_json::Value>>),
    /// Number of rows the statement affected.
    Affected(u64),
}

/// Handle on the PostgreSQL database identified by a connection URL.
///
/// Holds no open connection; `execute` connects per call.
#[derive(Debug, Clone)]
pub struct Database {
    url: String,
}

impl Database {
    /// Create a handle for the given `postgres://` connection URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Execute one statement, binding `params` positionally as `$1..$n`.
    ///
    /// Writes run with per-statement commit and return the affected-row
    /// count, even when zero rows changed. Reads fetch every row. Driver
    /// failures are logged and propagated unchanged; the connection is
    /// closed on every exit path (explicitly on success, by drop on error).
    pub async fn execute(&self, sql: &str, params: &[&str]) -> Result<QueryOutcome> {
        debug!(sql, "executing statement");

        let mut conn = PgConnection::connect(&self.url).await.map_err(|e| {
            error!(error = %e, "failed to connect to database");
            e
        })?;

        let outcome = match run_statement(&mut conn, sql, params).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "database error executing statement");
                return Err(e.into());
            }
        };

        conn.close().await?;
        Ok(outcome)
    }
}

async fn run_statement(
    conn: &mut PgConnection,
    sql: &str,
    params: &[&str],
) -> sqlx::Result<QueryOutcome> {
    let mut query = sqlx::query(sql);
    for param in params {
        query = query.bind(*param);
    }

    if is_write_statement(sql) {
        let result = query.execute(conn).await?;
        let affected = result.rows_affected();
        debug!(affected, "write statement committed");
        Ok(QueryOutcome::Affected(affected))
    } else {
        let rows = query.fetch_all(conn).await?;
        debug!(rows = rows.len(), "read statement returned rows");
        Ok(QueryOutcome::Rows(rows.iter().map(row_to_json).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_keywords_classify_as_writes() {
        for sql in [
            "INSERT INTO t VALUES (1)",
            "UPDATE t SET x = 1",
            "DELETE FROM t",
            "CREATE TABLE t (id INT)",
            "DROP TABLE t",
            "ALTER TABLE t ADD COLUMN y INT",
        ] {
            assert!(is_write_statement(sql), "{sql} should be a write");
        }
    }

    #[test]
    fn reads_and_unknowns_classify_as_reads() {
        for sql in [
            "SELECT 1",
            "WITH x AS (SELECT 1) SELECT * FROM x",
            "EXPLAIN SELECT 1",
            "SHOW search_path",
        ] {
            assert!(!is_write_statement(sql), "{sql} should be a read");
        }
    }

    #[test]
    fn classification_trims_and_folds_case() {
        assert!(is_write_statement("   insert into t values (1)"));
        assert!(is_write_statement("\n\tDeLeTe FROM t"));
        assert!(!is_write_statement("   select 1"));
    }

    #[test]
    fn comment_prefixed_write_classifies_as_read() {
        // Known limit of the prefix classifier, kept for compatibility.
        assert!(!is_write_statement("/* cleanup */ DELETE FROM t"));
    }
}
