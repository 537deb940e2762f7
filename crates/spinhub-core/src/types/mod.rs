//! Core type definitions used across the Spinhub workspace.

pub mod slug;

pub use slug::Slug;
