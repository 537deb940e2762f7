//! Validated newtype for campaign slugs.
//!
//! A slug identifies a company or influencer inside a URL. Keeping the
//! alphabet restricted to lowercase ASCII alphanumerics and hyphens means
//! a slug can never collide with the token separators (`.` and `:`) used
//! by the signing layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// URL-safe identifier for a campaign entity (company or influencer).
///
/// Immutable once assigned and unique within its entity type. The slug is
/// not a secret; the signing layer wraps it in a tamper-evident token
/// before it appears in public links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Creates a slug after validating the alphabet.
    ///
    /// Accepts non-empty strings of lowercase ASCII letters, digits, and
    /// hyphens. Anything else is a validation error.
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into();
        if value.is_empty() {
            return Err(AppError::validation("Slug must not be empty"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(AppError::validation(format!(
                "Slug '{value}' contains characters outside [a-z0-9-]"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the slug and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Slug {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> String {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_accepts_lowercase_digits_hyphens() {
        let slug = Slug::new("acme-motors-2025").expect("should validate");
        assert_eq!(slug.as_str(), "acme-motors-2025");
    }

    #[test]
    fn test_slug_rejects_empty() {
        assert!(Slug::new("").is_err());
    }

    #[test]
    fn test_slug_rejects_uppercase_and_separators() {
        assert!(Slug::new("Acme").is_err());
        assert!(Slug::new("acme motors").is_err());
        assert!(Slug::new("acme:1700000000").is_err());
        assert!(Slug::new("acme.sig").is_err());
        assert!(Slug::new("under_score").is_err());
    }

    #[test]
    fn test_slug_from_str() {
        let slug: Slug = "wheel-deal".parse().expect("should parse");
        assert_eq!(slug.to_string(), "wheel-deal");
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let slug = Slug::new("acme-motors").expect("should validate");
        let json = serde_json::to_string(&slug).expect("serialize");
        assert_eq!(json, "\"acme-motors\"");
        let parsed: Slug = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(slug, parsed);

        let bad: Result<Slug, _> = serde_json::from_str("\"Not A Slug\"");
        assert!(bad.is_err());
    }
}
