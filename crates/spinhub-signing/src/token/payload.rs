//! Signed payload layout shared by the encoder and decoder.

use std::time::Duration;

use chrono::Utc;

/// Separates the payload from the signature in a token.
pub(crate) const SIGNATURE_SEPARATOR: char = '.';

/// Separates the slug from the issue timestamp inside a payload.
pub(crate) const TIMESTAMP_SEPARATOR: char = ':';

/// The signed portion of a slug token.
///
/// A bare payload is just the slug. A timestamped payload appends the
/// issue time as `slug:unix_seconds`, which puts the timestamp under the
/// signature instead of leaving it a forgeable side channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    /// The campaign slug being protected.
    pub slug: String,
    /// Issue time in seconds since the Unix epoch, when embedded.
    pub issued_at: Option<i64>,
}

impl TokenPayload {
    /// Payload without an issue timestamp.
    pub fn bare(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            issued_at: None,
        }
    }

    /// Payload stamped with the current wall-clock time.
    pub fn issued_now(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            issued_at: Some(Utc::now().timestamp()),
        }
    }

    /// Renders the exact character sequence that gets signed.
    pub fn render(&self) -> String {
        match self.issued_at {
            Some(issued_at) => format!("{}{}{}", self.slug, TIMESTAMP_SEPARATOR, issued_at),
            None => self.slug.clone(),
        }
    }

    /// Parses a verified payload back into slug and optional timestamp.
    ///
    /// The timestamp is strictly the trailing `:`-separated integer field;
    /// a payload whose trailing field is not an integer is a bare slug.
    /// Historical slugs may contain `:`, so parsing must not guess beyond
    /// that rule.
    pub fn parse(payload: &str) -> Self {
        if let Some((slug, tail)) = payload.rsplit_once(TIMESTAMP_SEPARATOR) {
            if !slug.is_empty() {
                if let Ok(issued_at) = tail.parse::<i64>() {
                    return Self {
                        slug: slug.to_string(),
                        issued_at: Some(issued_at),
                    };
                }
            }
        }
        Self {
            slug: payload.to_string(),
            issued_at: None,
        }
    }

    /// Whether the embedded issue time lies further in the past than `max_age`.
    ///
    /// Issue times are floored to whole seconds at encode time, so age is
    /// measured on a millisecond clock; a one-second window would otherwise
    /// round a just-expired token back to fresh. Ages equal to the limit
    /// and future issue times count as fresh. Payloads without a timestamp
    /// never age.
    pub fn is_older_than(&self, max_age: Duration) -> bool {
        let Some(issued_at) = self.issued_at else {
            return false;
        };
        let age_ms = Utc::now()
            .timestamp_millis()
            .saturating_sub(issued_at.saturating_mul(1000));
        age_ms > 0 && age_ms as u128 > max_age.as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bare() {
        assert_eq!(TokenPayload::bare("acme-motors").render(), "acme-motors");
    }

    #[test]
    fn test_render_timestamped() {
        let payload = TokenPayload {
            slug: "acme-motors".to_string(),
            issued_at: Some(1_700_000_000),
        };
        assert_eq!(payload.render(), "acme-motors:1700000000");
    }

    #[test]
    fn test_parse_bare() {
        let payload = TokenPayload::parse("acme-motors");
        assert_eq!(payload.slug, "acme-motors");
        assert_eq!(payload.issued_at, None);
    }

    #[test]
    fn test_parse_timestamped() {
        let payload = TokenPayload::parse("acme-motors:1700000000");
        assert_eq!(payload.slug, "acme-motors");
        assert_eq!(payload.issued_at, Some(1_700_000_000));
    }

    #[test]
    fn test_parse_non_numeric_tail_is_bare() {
        let payload = TokenPayload::parse("acme:motors");
        assert_eq!(payload.slug, "acme:motors");
        assert_eq!(payload.issued_at, None);
    }

    #[test]
    fn test_parse_takes_only_the_trailing_field() {
        let payload = TokenPayload::parse("a:b:1700000000");
        assert_eq!(payload.slug, "a:b");
        assert_eq!(payload.issued_at, Some(1_700_000_000));
    }

    #[test]
    fn test_render_parse_round_trip() {
        let original = TokenPayload {
            slug: "wheel-deal".to_string(),
            issued_at: Some(1_700_000_123),
        };
        assert_eq!(TokenPayload::parse(&original.render()), original);
    }

    #[test]
    fn test_is_older_than_without_timestamp() {
        assert!(!TokenPayload::bare("acme").is_older_than(Duration::ZERO));
    }

    #[test]
    fn test_is_older_than_fresh_and_stale() {
        let fresh = TokenPayload::issued_now("acme");
        assert!(!fresh.is_older_than(Duration::from_secs(60)));

        let stale = TokenPayload {
            slug: "acme".to_string(),
            issued_at: Some(Utc::now().timestamp() - 5),
        };
        assert!(stale.is_older_than(Duration::from_secs(1)));
        assert!(!stale.is_older_than(Duration::from_secs(3600)));
    }

    #[test]
    fn test_future_issue_time_is_fresh() {
        let future = TokenPayload {
            slug: "acme".to_string(),
            issued_at: Some(Utc::now().timestamp() + 100),
        };
        assert!(!future.is_older_than(Duration::ZERO));
    }

    #[test]
    fn test_extreme_issue_times_do_not_overflow() {
        let ancient = TokenPayload {
            slug: "acme".to_string(),
            issued_at: Some(i64::MIN),
        };
        assert!(ancient.is_older_than(Duration::from_secs(1)));

        let distant = TokenPayload {
            slug: "acme".to_string(),
            issued_at: Some(i64::MAX),
        };
        assert!(!distant.is_older_than(Duration::from_secs(1)));
    }
}
