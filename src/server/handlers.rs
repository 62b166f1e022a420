//! MCP tool handlers for the portfolio search server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::SearchError;
use crate::services::SearchService;
use crate::tools::ContentSearchTools;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The MCP server exposing portfolio content search.
#[derive(Clone)]
pub struct PortfolioSearchServer {
    search_service: Arc<dyn SearchService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for PortfolioSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "portfolio-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Search a hospitality executive's portfolio: blog posts, projects, speaking engagements, awards and testimonials, in every published locale.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContentParams {
    query: String,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    max_results: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SuggestContentParams {
    #[serde(default)]
    query: String,
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetContentParams {
    id: String,
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListContentParams {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    content_type: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EmptyParams {}

// Caller mistakes surface as INVALID_PARAMS, everything else as INTERNAL_ERROR
fn to_mcp_error(e: SearchError) -> McpError {
    let code = if e.is_client_error() {
        ErrorCode::INVALID_PARAMS
    } else {
        ErrorCode::INTERNAL_ERROR
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_error(e: serde_json::Error) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(json_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl PortfolioSearchServer {
    /// Create a new server over the given search tools.
    ///
    /// `catalog_path` enables the `reload_catalog` tool.
    pub fn new(tools: ContentSearchTools, catalog_path: Option<PathBuf>) -> Self {
        let search_service = Arc::new(crate::services::SearchServiceImpl::new(
            Arc::new(RwLock::new(tools)),
            catalog_path,
        )) as Arc<dyn SearchService>;

        Self::with_service(search_service)
    }

    /// Create a server over an existing service.
    pub fn with_service(search_service: Arc<dyn SearchService>) -> Self {
        Self {
            search_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Ranked keyword search across all portfolio content.
    #[tool(
        description = "Search portfolio content (blog, project, speaking, award, testimonial) by keyword. Title matches rank above excerpt, category and type matches. Returns at most max_results records (default 10) with their relevance scores; an empty query returns no results."
    )]
    async fn search_content(
        &self,
        params: Parameters<SearchContentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .search_service
            .search(params.query.clone(), params.locale, params.max_results)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "query": params.query,
            "locale": response.locale,
            "result_count": response.results.len(),
            "corpus_size": response.corpus_size,
            "results": response.results,
        }))
    }

    /// Autocomplete suggestions for a partial query.
    #[tool(
        description = "Autocomplete suggestions for a partial search query. With an empty query, returns the default trending suggestions."
    )]
    async fn suggest_content(
        &self,
        params: Parameters<SuggestContentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .search_service
            .suggest(params.query.clone(), params.locale)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "query": params.query,
            "locale": response.locale,
            "suggestions": response.suggestions,
        }))
    }

    /// Retrieve one content record by ID.
    #[tool(description = "Retrieve a single portfolio content record by ID")]
    async fn get_content(
        &self,
        params: Parameters<GetContentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let record = self
            .search_service
            .get_content(params.id, params.locale)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::to_value(&record).map_err(json_error)?)
    }

    /// Browse content newest first.
    #[tool(
        description = "List portfolio content newest first, optionally filtered by content_type (blog, project, speaking, award, testimonial)"
    )]
    async fn list_content(
        &self,
        params: Parameters<ListContentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let records = self
            .search_service
            .list_content(params.locale, params.content_type, params.limit)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "count": records.len(),
            "records": records,
        }))
    }

    /// Published locales.
    #[tool(description = "List the locales portfolio content is published in")]
    async fn list_locales(
        &self,
        _params: Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        let info = self.search_service.locales().await;

        json_result(&serde_json::json!({
            "default_locale": info.default_locale,
            "locales": info.locales,
        }))
    }

    /// Re-read the catalog file.
    #[tool(
        description = "Reload the content catalog from disk, replacing the searchable content in every locale"
    )]
    async fn reload_catalog(
        &self,
        _params: Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: reload_catalog called");

        let entries = self
            .search_service
            .reload_catalog()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reload catalog: {:?}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({ "entries": entries }))
    }
}
