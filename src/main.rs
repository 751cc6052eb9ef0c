//! psql-mcp binary entrypoint.
//!
//! Assembles the connection URL from the standard `PG*` environment
//! variables (or flags), then serves MCP over stdio. All logging goes to
//! stderr; stdout belongs to the protocol.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use psql_mcp::{Database, McpServer, McpSession, Result};

#[derive(Parser, Debug)]
#[command(name = "psql-mcp")]
#[command(about = "MCP server for PostgreSQL", version)]
struct Args {
    /// Database name
    #[arg(long, env = "PGDATABASE")]
    database: String,

    /// Database user
    #[arg(long, env = "PGUSER")]
    user: String,

    /// Database password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    password: String,

    /// Database host
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    host: String,

    /// Database port
    #[arg(long, env = "PGPORT", default_value = "5432")]
    port: u16,
}

impl Args {
    fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::info!(
        host = %args.host,
        port = args.port,
        database = %args.database,
        "starting PostgreSQL MCP server"
    );

    let session = McpSession::new(Database::new(args.connection_url()));
    let mut server = McpServer::new(session);
    server.run().await
}
