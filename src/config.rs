//! Configuration management for the portfolio search server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present; it is read with `dotenvy`, which never
//! writes to stdout (stdout carries MCP traffic).

use crate::domain::Locale;
use crate::error::{ConfigError, ConfigResult};
use crate::search::{FieldWeights, RankingOptions, DEFAULT_MAX_RESULTS, DEFAULT_SUGGESTION_COUNT};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Upper bound accepted for `SEARCH_MAX_RESULTS`.
const MAX_RESULTS_LIMIT: usize = 100;

/// Configuration for the portfolio search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,

    /// Locale used when a request does not name one (default: "en")
    pub default_locale: Locale,

    /// Ranking weights and result cutoff (defaults: 10/5/3/2, top 10)
    pub ranking: RankingOptions,

    /// Suggestions shown for an empty query (default: 6)
    pub suggestion_default_count: usize,

    /// How long a built corpus stays cached, in minutes (default: 30)
    pub cache_ttl_minutes: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTENT_CATALOG_PATH`: JSON catalog file (default: built-in catalog)
    /// - `DEFAULT_LOCALE`: fallback locale (default: "en")
    /// - `SEARCH_MAX_RESULTS`: ranking cutoff, 1-100 (default: 10)
    /// - `SEARCH_WEIGHT_TITLE` / `_EXCERPT` / `_CATEGORY` / `_TYPE`: field weights
    ///   (defaults: 10 / 5 / 3 / 2)
    /// - `SUGGESTION_DEFAULT_COUNT`: empty-query suggestions (default: 6)
    /// - `CORPUS_CACHE_TTL_MINUTES`: corpus cache TTL (default: 30)
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let catalog_path = match env::var("CONTENT_CATALOG_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTENT_CATALOG_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => None,
        };

        let default_locale = match env::var("DEFAULT_LOCALE") {
            Ok(tag) => Locale::new(&tag).map_err(|e| ConfigError::InvalidValue {
                var: "DEFAULT_LOCALE".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => Locale::default(),
        };

        let defaults = FieldWeights::default();
        let weights = FieldWeights {
            title: Self::parse_env("SEARCH_WEIGHT_TITLE", defaults.title)?,
            excerpt: Self::parse_env("SEARCH_WEIGHT_EXCERPT", defaults.excerpt)?,
            category: Self::parse_env("SEARCH_WEIGHT_CATEGORY", defaults.category)?,
            content_type: Self::parse_env("SEARCH_WEIGHT_TYPE", defaults.content_type)?,
        };

        if weights.is_zero() {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_WEIGHT_*".to_string(),
                reason: "At least one field weight must be non-zero".to_string(),
            });
        }

        let max_results = Self::parse_env("SEARCH_MAX_RESULTS", DEFAULT_MAX_RESULTS)?;
        if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MAX_RESULTS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_RESULTS_LIMIT),
            });
        }

        let suggestion_default_count =
            Self::parse_env("SUGGESTION_DEFAULT_COUNT", DEFAULT_SUGGESTION_COUNT)?;
        let cache_ttl_minutes = Self::parse_env("CORPUS_CACHE_TTL_MINUTES", 30u64)?;

        Ok(Config {
            catalog_path,
            default_locale,
            ranking: RankingOptions {
                weights,
                max_results,
            },
            suggestion_default_count,
            cache_ttl_minutes,
        })
    }

    /// Parse a numeric environment variable, falling back to `default` when unset.
    fn parse_env<T: FromStr>(var_name: &str, default: T) -> ConfigResult<T> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Corpus cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_minutes.saturating_mul(60)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            default_locale: Locale::default(),
            ranking: RankingOptions::default(),
            suggestion_default_count: DEFAULT_SUGGESTION_COUNT,
            cache_ttl_minutes: 30,
        }
    }
}
