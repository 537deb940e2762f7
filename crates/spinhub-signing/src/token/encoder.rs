//! Slug token creation with optional embedded issue time.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use spinhub_core::config::SigningConfig;
use spinhub_core::config::signing::PLACEHOLDER_SECRET;
use spinhub_core::error::AppError;

use crate::mac::{SaltedHmac, SignatureProvider};

use super::payload::{SIGNATURE_SEPARATOR, TokenPayload};

/// Creates signed slug tokens for public share links.
#[derive(Clone)]
pub struct TokenEncoder {
    signer: Arc<dyn SignatureProvider>,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder").finish_non_exhaustive()
    }
}

impl TokenEncoder {
    /// Creates an encoder from signing configuration.
    ///
    /// Fails when the secret is empty or no salt can be resolved. Warns
    /// when the placeholder secret is still in place so a deployment
    /// cannot mint tokens on it unnoticed.
    pub fn new(config: &SigningConfig) -> Result<Self, AppError> {
        if config.secret_key.is_empty() {
            return Err(AppError::configuration(
                "signing.secret_key must not be empty",
            ));
        }
        if config.secret_key == PLACEHOLDER_SECRET {
            warn!("signing.secret_key is still the placeholder value");
        }
        let salt = config.resolve_slug_salt()?;
        Ok(Self::from_parts(&config.secret_key, salt))
    }

    /// Creates an encoder directly from a secret and salt pair.
    pub fn from_parts(secret: &str, salt: &str) -> Self {
        Self {
            signer: Arc::new(SaltedHmac::new(secret, salt)),
        }
    }

    /// Creates an encoder over an arbitrary signature provider.
    pub fn with_provider(signer: Arc<dyn SignatureProvider>) -> Self {
        Self { signer }
    }

    /// Signs a slug into a `payload.signature` token.
    ///
    /// Returns `None` for an empty slug and on signing failure. Callers
    /// treat `None` as "fall back to the raw slug", so link generation
    /// degrades instead of aborting.
    pub fn encode(&self, slug: &str) -> Option<String> {
        if slug.is_empty() {
            debug!("Refusing to encode an empty slug");
            return None;
        }
        self.seal(&TokenPayload::bare(slug))
    }

    /// Signs a slug, embedding the current time when a positive TTL is
    /// requested.
    ///
    /// The TTL itself is not stored — decoders enforce freshness against
    /// their own `max_age`. A zero or absent TTL produces the same token
    /// as [`encode`](Self::encode).
    pub fn encode_with_expiry(&self, slug: &str, ttl: Option<Duration>) -> Option<String> {
        if slug.is_empty() {
            debug!("Refusing to encode an empty slug");
            return None;
        }
        let payload = match ttl {
            Some(ttl) if !ttl.is_zero() => TokenPayload::issued_now(slug),
            _ => TokenPayload::bare(slug),
        };
        self.seal(&payload)
    }

    fn seal(&self, payload: &TokenPayload) -> Option<String> {
        let rendered = payload.render();
        match self.signer.sign(&rendered) {
            Ok(signature) => Some(format!("{rendered}{SIGNATURE_SEPARATOR}{signature}")),
            Err(e) => {
                warn!(error = %e, "Slug token signing failed");
                None
            }
        }
    }
}
