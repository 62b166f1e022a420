//! Application service layer.
//!
//! Services validate request input and orchestrate the search tools. They
//! provide a clean boundary between the MCP handlers and the corpus layer.

mod search_service;

pub use search_service::{
    LocaleInfo, SearchService, SearchServiceImpl, MAX_QUERY_CHARS, MAX_RESULTS_LIMIT,
};
