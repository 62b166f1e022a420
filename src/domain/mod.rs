//! Domain value objects and types.
//!
//! Type-safe wrappers for record identifiers and locale tags. These value
//! objects validate at construction time so malformed input is rejected at
//! the corpus boundary and never reaches the ranking code.

pub mod errors;
pub mod locale;
pub mod record_id;

pub use errors::ValidationError;
pub use locale::Locale;
pub use record_id::RecordId;
