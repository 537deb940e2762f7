//! Slug derivation and allocation.

pub mod generator;
pub mod memory;
pub mod slugify;

pub use generator::SlugGenerator;
pub use memory::MemorySlugDirectory;
pub use slugify::slugify;
