//! # spinhub-links
//!
//! Slug allocation and shareable campaign link building for the Spinhub
//! platform.
//!
//! ## Modules
//!
//! - `slug` — slugification, uniqueness retry, and the in-memory directory
//! - `share` — play/spin/dashboard/register links over signed slug tokens

pub mod share;
pub mod slug;

pub use share::{ShareLink, ShareLinkBuilder, ShareTarget};
pub use slug::{MemorySlugDirectory, SlugGenerator, slugify};
