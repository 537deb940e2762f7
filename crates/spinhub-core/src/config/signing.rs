//! Token signing configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;

/// Placeholder secret shipped in the default configuration.
///
/// The signer warns when it sees this value so a deployment cannot run on
/// it unnoticed.
pub const PLACEHOLDER_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Built-in salt, usable only with an explicit opt-in.
const DEFAULT_SLUG_SALT: &str = "spinhub-slug-signing-2025";

/// Slug token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Secret key for slug token signing (HMAC-SHA256).
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Salt that domain-separates slug tokens from other uses of the secret.
    #[serde(default)]
    pub slug_salt: Option<String>,
    /// Permit falling back to the built-in salt when `slug_salt` is unset.
    #[serde(default)]
    pub allow_default_salt: bool,
}

impl SigningConfig {
    /// Resolves the effective signing salt.
    ///
    /// An explicitly configured salt always wins. Without one, the built-in
    /// salt is used only when `allow_default_salt` is set — it is a
    /// predictable value, so the fallback is opt-in and logged rather than
    /// silent.
    pub fn resolve_slug_salt(&self) -> Result<&str, AppError> {
        if let Some(salt) = &self.slug_salt {
            if salt.is_empty() {
                return Err(AppError::configuration(
                    "signing.slug_salt must not be empty",
                ));
            }
            return Ok(salt);
        }
        if self.allow_default_salt {
            warn!("Using the built-in slug signing salt; set signing.slug_salt in production");
            return Ok(DEFAULT_SLUG_SALT);
        }
        Err(AppError::configuration(
            "signing.slug_salt is not set and signing.allow_default_salt is disabled",
        ))
    }
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            slug_salt: None,
            allow_default_salt: false,
        }
    }
}

fn default_secret_key() -> String {
    PLACEHOLDER_SECRET.to_string()
}
