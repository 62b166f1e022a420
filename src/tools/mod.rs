//! Search tools backing the MCP server.
//!
//! Tools own the catalog and the per-locale corpus cache; they are the only
//! place a corpus is built.

pub mod search;

pub use search::{
    ContentSearchTools, ListParams, SearchParams, SearchResponse, SuggestParams, SuggestResponse,
};
