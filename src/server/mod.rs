//! MCP server for portfolio content search.
//!
//! This module provides the MCP protocol server that exposes the search and
//! autocomplete operations to MCP clients.

pub mod handlers;

pub use handlers::PortfolioSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: PortfolioSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
