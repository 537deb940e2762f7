//! Slug token validation with legacy URL-mangling support.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use spinhub_core::config::SigningConfig;
use spinhub_core::error::AppError;

use crate::mac::{SaltedHmac, SignatureProvider};

use super::payload::{SIGNATURE_SEPARATOR, TokenPayload};

/// Reason a token failed to decode.
///
/// This is the complete caller-visible vocabulary: anything structurally
/// wrong, unauthentic, or internally broken is `Invalid`; only an
/// authentic token past its allowed age is `Expired`. Finer distinctions
/// show up in debug logs, never in the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    /// The token is malformed or its signature does not verify.
    #[error("token is invalid")]
    Invalid,
    /// The token is authentic but older than the allowed age.
    #[error("token has expired")]
    Expired,
}

/// Validates slug tokens minted by [`TokenEncoder`](super::TokenEncoder).
#[derive(Clone)]
pub struct TokenDecoder {
    signer: Arc<dyn SignatureProvider>,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder").finish_non_exhaustive()
    }
}

/// Failure modes of a single verification attempt.
enum AttemptFailure {
    Malformed,
    BadSignature,
    Expired,
}

impl TokenDecoder {
    /// Creates a decoder from signing configuration.
    pub fn new(config: &SigningConfig) -> Result<Self, AppError> {
        if config.secret_key.is_empty() {
            return Err(AppError::configuration(
                "signing.secret_key must not be empty",
            ));
        }
        let salt = config.resolve_slug_salt()?;
        Ok(Self::from_parts(&config.secret_key, salt))
    }

    /// Creates a decoder directly from a secret and salt pair.
    pub fn from_parts(secret: &str, salt: &str) -> Self {
        Self {
            signer: Arc::new(SaltedHmac::new(secret, salt)),
        }
    }

    /// Creates a decoder over an arbitrary signature provider.
    pub fn with_provider(signer: Arc<dyn SignatureProvider>) -> Self {
        Self { signer }
    }

    /// Decodes a token back to its slug without a freshness check.
    ///
    /// Any embedded issue time is ignored for freshness but still stripped
    /// from the returned slug.
    pub fn decode(&self, token: &str) -> Result<String, TokenRejection> {
        self.decode_inner(token, None)
    }

    /// Decodes a token, rejecting it as expired when its embedded issue
    /// time is older than `max_age`.
    ///
    /// Tokens without an embedded issue time pass the age check: only key
    /// holders mint tokens, so a timestampless token is one that was
    /// legitimately issued without expiry.
    pub fn decode_with_max_age(
        &self,
        token: &str,
        max_age: Duration,
    ) -> Result<String, TokenRejection> {
        self.decode_inner(token, Some(max_age))
    }

    fn decode_inner(
        &self,
        token: &str,
        max_age: Option<Duration>,
    ) -> Result<String, TokenRejection> {
        if token.is_empty() {
            debug!("Rejecting empty token");
            return Err(TokenRejection::Invalid);
        }
        match self.attempt(token, max_age) {
            Ok(slug) => Ok(slug),
            // An authentic token past its age is terminal; the legacy path
            // must not resurrect it.
            Err(AttemptFailure::Expired) => {
                debug!("Rejecting expired token");
                Err(TokenRejection::Expired)
            }
            // The legacy substitution cannot introduce a separator, so a
            // token without one stays malformed under any retry.
            Err(AttemptFailure::Malformed) => {
                debug!("Rejecting token without a signature separator");
                Err(TokenRejection::Invalid)
            }
            Err(AttemptFailure::BadSignature) => {
                // Retired link builders substituted ':' with '-' and '/'
                // with '_' before placing a token in a URL. Undo that over
                // the whole token and check once more. Slugs that already
                // contained '-' or '_' predate this shim and cannot be
                // restored; their current-format tokens are unaffected.
                let candidate = restore_legacy_separators(token);
                if candidate == token {
                    debug!("Rejecting token with an invalid signature");
                    return Err(TokenRejection::Invalid);
                }
                match self.attempt(&candidate, max_age) {
                    Ok(slug) => {
                        debug!("Accepted token in legacy separator form");
                        Ok(slug)
                    }
                    Err(AttemptFailure::Expired) => {
                        debug!("Rejecting expired token in legacy separator form");
                        Err(TokenRejection::Expired)
                    }
                    Err(_) => {
                        debug!("Rejecting token with an invalid signature");
                        Err(TokenRejection::Invalid)
                    }
                }
            }
        }
    }

    /// One verification pass over one candidate form of the token.
    fn attempt(&self, token: &str, max_age: Option<Duration>) -> Result<String, AttemptFailure> {
        let (payload, signature) = token
            .rsplit_once(SIGNATURE_SEPARATOR)
            .ok_or(AttemptFailure::Malformed)?;
        if !self.signer.verify(payload, signature) {
            return Err(AttemptFailure::BadSignature);
        }
        let payload = TokenPayload::parse(payload);
        if let Some(max_age) = max_age {
            if payload.is_older_than(max_age) {
                return Err(AttemptFailure::Expired);
            }
        }
        Ok(payload.slug)
    }
}

/// Reverses the substitution applied by retired link builders.
fn restore_legacy_separators(token: &str) -> String {
    token.replace('-', ":").replace('_', "/")
}
