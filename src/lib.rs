//! RFC 4648 binary-to-text codecs: Base16, Base32 (standard, extended hex and
//! Crockford with its optional check symbol) and Base64 (standard and
//! URL-safe).
//!
//! Decoding is permissive about layout and strict about content: ASCII
//! whitespace anywhere in the input is ignored, while foreign characters,
//! misplaced or miscounted padding, impossible lengths and non-zero trailing
//! bits are rejected.
//!
//! ```
//! use base_rfc::{Base16, Base64, Encoding};
//!
//! let base64 = Base64::standard();
//! assert_eq!(base64.encode(b"Hello World"), "SGVsbG8gV29ybGQ=");
//! assert_eq!(base64.decode("SGVsbG8g\nV29ybGQ=").unwrap(), b"Hello World");
//! assert_eq!(base64.decode("SGVsbG8gV29ybGQ"), None);
//!
//! assert_eq!(Base16::upper().decode("DEAD BEEF").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
//! ```

mod codec;
mod core;
mod encoders;

pub use codec::{Codec, Encoding};
pub use crate::core::alphabet::{self, Alphabet};
pub use crate::core::config::{CodecRegistry, Settings};
pub use encoders::algorithms::{
    Base16, Base32, Base64, Base64Alphabet, Case, DecodeError, Padding, RegistryError,
    check_symbol, find_closest_codec,
};

/// Encodes `data` with `codec`.
pub fn encode(data: &[u8], codec: &Codec) -> String {
    codec.encode(data)
}

/// Decodes `encoded` with `codec`, returning `None` for malformed input.
pub fn decode(encoded: &str, codec: &Codec) -> Option<Vec<u8>> {
    codec.decode(encoded)
}

/// Decodes `encoded` with `codec`, keeping the reason for a rejection.
pub fn try_decode(encoded: &str, codec: &Codec) -> Result<Vec<u8>, DecodeError> {
    codec.try_decode(encoded)
}
