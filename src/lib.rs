//! # spinhub
//!
//! Facade crate for the Spinhub library workspace: signed slug tokens and
//! shareable campaign links for prize-wheel platforms.
//!
//! The member crates stay usable on their own; this crate re-exports the
//! public surface so embedding applications can depend on a single name.

pub use spinhub_core::config::{AppConfig, LinksConfig, LoggingConfig, SigningConfig};
pub use spinhub_core::error::{AppError, ErrorKind};
pub use spinhub_core::logging;
pub use spinhub_core::result::AppResult;
pub use spinhub_core::traits::SlugDirectory;
pub use spinhub_core::types::Slug;
pub use spinhub_links::{
    MemorySlugDirectory, ShareLink, ShareLinkBuilder, ShareTarget, SlugGenerator, slugify,
};
pub use spinhub_signing::{
    SaltedHmac, SignatureProvider, TokenDecoder, TokenEncoder, TokenPayload, TokenRejection,
};
