//! Public campaign link building.

pub mod builder;
pub mod link;

pub use builder::ShareLinkBuilder;
pub use link::{ShareLink, ShareTarget};
