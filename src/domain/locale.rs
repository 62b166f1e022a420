//! Locale value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A normalized language tag such as `en` or `fr-CA`.
///
/// The primary subtag is two or three ASCII letters and is stored in lower
/// case; an optional region subtag is two ASCII letters stored in upper case.
/// `_` is accepted as a separator and normalized to `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    /// Parse and normalize a locale tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLocale` when the tag is not of the
    /// form `ll` or `ll-RR`.
    pub fn new(tag: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = tag.as_ref().trim();
        let invalid = || ValidationError::InvalidLocale(raw.to_string());

        let mut parts = raw.split(['-', '_']);
        let language = parts.next().ok_or_else(invalid)?;
        let region = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut normalized = language.to_ascii_lowercase();
        if let Some(region) = region {
            if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid());
            }
            normalized.push('-');
            normalized.push_str(&region.to_ascii_uppercase());
        }

        Ok(Self(normalized))
    }

    /// The normalized tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`fr` for `fr-CA`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Locale::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
