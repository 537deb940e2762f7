//! Salted HMAC signature creation and verification.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use spinhub_core::error::AppError;
use spinhub_core::result::AppResult;

type HmacSha256 = Hmac<Sha256>;

/// Computes and verifies detached signatures over token payloads.
///
/// The production implementation is [`SaltedHmac`]. The seam keeps the
/// token layer independent of the MAC primitive, so any keyed hash that
/// produces a printable signature can back it.
pub trait SignatureProvider: Send + Sync {
    /// Signs the payload and returns the printable signature.
    fn sign(&self, payload: &str) -> AppResult<String>;

    /// Verifies a printable signature over the payload.
    fn verify(&self, payload: &str, signature: &str) -> bool;
}

/// HMAC-SHA256 signer keyed by a salted digest of the secret.
///
/// Signatures are rendered as unpadded URL-safe base64, so a whole token
/// stays valid inside a URL path segment without percent-encoding.
#[derive(Clone)]
pub struct SaltedHmac {
    /// Derived MAC key; never exposed.
    key: [u8; 32],
}

impl std::fmt::Debug for SaltedHmac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltedHmac").finish_non_exhaustive()
    }
}

impl SaltedHmac {
    /// Creates a signer from the raw secret and salt.
    ///
    /// The MAC key is `SHA-256(salt || 0x1F || secret)`. The unit separator
    /// keeps (salt, secret) pairs with shifted boundaries from deriving
    /// the same key. Changing either input invalidates every signature
    /// minted under the old pair.
    pub fn new(secret: &str, salt: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update([0x1f]);
        hasher.update(secret.as_bytes());
        Self {
            key: hasher.finalize().into(),
        }
    }

    fn mac(&self) -> AppResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|e| AppError::internal(format!("Invalid HMAC key: {e}")))
    }
}

impl SignatureProvider for SaltedHmac {
    fn sign(&self, payload: &str) -> AppResult<String> {
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn verify(&self, payload: &str, signature: &str) -> bool {
        // A signature that does not even decode cannot be authentic.
        let Ok(tag) = URL_SAFE_NO_PAD.decode(signature) else {
            return false;
        };
        let Ok(mut mac) = self.mac() else {
            return false;
        };
        mac.update(payload.as_bytes());
        // Constant-time comparison happens inside verify_slice.
        mac.verify_slice(&tag).is_ok()
    }
}
