//! Trait seams implemented by the embedding application.

pub mod slugs;

pub use slugs::SlugDirectory;
