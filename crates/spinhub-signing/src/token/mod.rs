//! Slug token payload layout, encoding, and decoding.

pub mod decoder;
pub mod encoder;
pub mod payload;

pub use decoder::{TokenDecoder, TokenRejection};
pub use encoder::TokenEncoder;
pub use payload::TokenPayload;
