//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenKind};
pub use decoder::{JwtDecoder, TokenError};
pub use encoder::{JwtEncoder, TokenPair};
