use serde::Deserialize;

use crate::encoders::algorithms::{Base16, Base32, Base64, DecodeError};

/// A binary-to-text encoding.
///
/// Implementations are immutable configuration values; every call works on
/// call-local buffers, so a codec can be shared freely between threads.
pub trait Encoding {
    /// Short name of the alphabet in use, e.g. `"base64url"`.
    fn name(&self) -> &'static str;

    /// Encodes `data`. Never fails; empty input gives an empty string.
    fn encode(&self, data: &[u8]) -> String;

    /// Decodes `text`, reporting why malformed input was rejected.
    fn try_decode(&self, text: &str) -> Result<Vec<u8>, DecodeError>;

    /// Decodes `text`, or returns `None` for any malformed, empty,
    /// whitespace-only or padding-only input.
    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        match self.try_decode(text) {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                tracing::debug!(codec = self.name(), %error, "decode rejected input");
                None
            }
        }
    }
}

/// Any of the supported codecs, selected by configuration.
///
/// Deserializes from a table tagged with `kind`:
///
/// ```toml
/// kind = "base32"
/// variant = "crockford"
/// check_symbol = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Codec {
    Base16(Base16),
    Base32(Base32),
    Base64(Base64),
}

impl Default for Codec {
    fn default() -> Self {
        Codec::Base64(Base64::standard())
    }
}

impl From<Base16> for Codec {
    fn from(codec: Base16) -> Self {
        Codec::Base16(codec)
    }
}

impl From<Base32> for Codec {
    fn from(codec: Base32) -> Self {
        Codec::Base32(codec)
    }
}

impl From<Base64> for Codec {
    fn from(codec: Base64) -> Self {
        Codec::Base64(codec)
    }
}

impl Encoding for Codec {
    fn name(&self) -> &'static str {
        match self {
            Codec::Base16(codec) => codec.name(),
            Codec::Base32(codec) => codec.name(),
            Codec::Base64(codec) => codec.name(),
        }
    }

    fn encode(&self, data: &[u8]) -> String {
        match self {
            Codec::Base16(codec) => codec.encode(data),
            Codec::Base32(codec) => codec.encode(data),
            Codec::Base64(codec) => codec.encode(data),
        }
    }

    fn try_decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        match self {
            Codec::Base16(codec) => codec.try_decode(text),
            Codec::Base32(codec) => codec.try_decode(text),
            Codec::Base64(codec) => codec.try_decode(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::algorithms::{Base64Alphabet, Case, Padding};

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        codec: Codec,
    }

    fn parse(toml: &str) -> Codec {
        toml::from_str::<Wrapper>(toml).unwrap().codec
    }

    #[test]
    fn test_deserialize_tagged_codecs() {
        assert_eq!(
            parse("[codec]\nkind = \"base16\"\ncase = \"lower\""),
            Codec::Base16(Base16::new(Case::Lower))
        );
        assert_eq!(
            parse("[codec]\nkind = \"base64\"\nalphabet = \"url_safe\"\npadding = \"omitted\""),
            Codec::Base64(Base64::new(Base64Alphabet::UrlSafe, Padding::Omitted))
        );
        assert_eq!(
            parse("[codec]\nkind = \"base32\"\nvariant = \"crockford\"\ncheck_symbol = true"),
            Codec::Base32(Base32::crockford().with_check_symbol(true))
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        assert_eq!(parse("[codec]\nkind = \"base16\""), Codec::Base16(Base16::upper()));
        assert_eq!(parse("[codec]\nkind = \"base64\""), Codec::Base64(Base64::standard()));
        assert_eq!(
            parse("[codec]\nkind = \"base32\"\nvariant = \"hex\""),
            Codec::Base32(Base32::hex())
        );
    }

    #[test]
    fn test_dispatch() {
        let codec = Codec::from(Base64::standard());
        assert_eq!(codec.name(), "base64");
        assert_eq!(codec.encode(b"Hello World"), "SGVsbG8gV29ybGQ=");
        assert_eq!(codec.decode("SGVsbG8gV29ybGQ=").unwrap(), b"Hello World");
        assert_eq!(Codec::from(Base32::crockford()).name(), "crockford");
        assert_eq!(Codec::from(Base16::lower()).encode(&[0xAB]), "ab");
    }

    #[test]
    fn test_codecs_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Codec>();
    }
}
