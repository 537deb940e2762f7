//! # spinhub-signing
//!
//! Tamper-evident slug tokens for the Spinhub platform. A token wraps a
//! campaign slug (and optionally its issue time) in a salted HMAC so it
//! can travel through public share URLs without exposing or allowing
//! forgery of the underlying identifier.
//!
//! ## Modules
//!
//! - `mac` — the signing seam and the salted HMAC-SHA256 implementation
//! - `token` — payload layout, encoding, and legacy-compatible decoding

pub mod mac;
pub mod token;

pub use mac::{SaltedHmac, SignatureProvider};
pub use token::{TokenDecoder, TokenEncoder, TokenPayload, TokenRejection};
