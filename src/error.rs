//! Error types for the MCP server.

use thiserror::Error;

/// Errors produced while handling MCP requests.
#[derive(Error, Debug)]
pub enum McpError {
    /// Tool name is not one of the registered tools.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required tool or prompt argument was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArg(String),

    /// Client-supplied SQL failed a tool's shape gate before execution.
    #[error("{reason}")]
    InvalidQuery {
        /// Tool whose gate rejected the statement
        tool: String,
        /// Human-readable rejection reason
        reason: String,
    },

    /// The underlying database call failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource URI scheme is not `memo`.
    #[error("Unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    /// Resource path under `memo://` does not exist.
    #[error("Unknown resource path: {0}")]
    UnknownResourcePath(String),

    /// Prompt name is not one of the registered prompts.
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the stdio transport failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MCP operations.
pub type Result<T> = std::result::Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_name() {
        let err = McpError::UnknownTool("drop-database".to_string());
        assert_eq!(err.to_string(), "Unknown tool: drop-database");

        let err = McpError::MissingArg("table_name".to_string());
        assert_eq!(err.to_string(), "Missing required argument: table_name");
    }

    #[test]
    fn invalid_query_displays_reason_only() {
        let err = McpError::InvalidQuery {
            tool: "read-query".to_string(),
            reason: "Only SELECT queries are allowed for read-query".to_string(),
        };
        assert_eq!(err.to_string(), "Only SELECT queries are allowed for read-query");
    }
}
