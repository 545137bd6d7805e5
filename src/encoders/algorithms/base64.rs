use serde::Deserialize;

use super::bits;
use super::errors::DecodeError;
use super::scanner::{PAD, Padding, Scanner, pad_len};
use crate::Encoding;
use crate::core::alphabet::{Alphabet, BASE64, BASE64_URL_SAFE};

/// Symbols in one Base64 block (three bytes).
const BLOCK: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base64Alphabet {
    /// `A-Za-z0-9+/`
    #[default]
    Standard,
    /// `A-Za-z0-9-_`, RFC 4648 section 5.
    UrlSafe,
}

/// RFC 4648 Base64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Base64 {
    #[serde(default)]
    alphabet: Base64Alphabet,
    #[serde(default)]
    padding: Padding,
}

impl Base64 {
    pub const fn new(alphabet: Base64Alphabet, padding: Padding) -> Self {
        Base64 { alphabet, padding }
    }

    /// Standard alphabet, padding required.
    pub const fn standard() -> Self {
        Self::new(Base64Alphabet::Standard, Padding::Required)
    }

    /// URL-safe alphabet, padding omitted on encode and inferred on decode.
    pub const fn url_safe() -> Self {
        Self::new(Base64Alphabet::UrlSafe, Padding::Omitted)
    }

    pub const fn with_padding(self, padding: Padding) -> Self {
        Self::new(self.alphabet, padding)
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    fn table(&self) -> &'static Alphabet {
        match self.alphabet {
            Base64Alphabet::Standard => &BASE64,
            Base64Alphabet::UrlSafe => &BASE64_URL_SAFE,
        }
    }
}

impl Encoding for Base64 {
    fn name(&self) -> &'static str {
        self.table().name()
    }

    fn encode(&self, data: &[u8]) -> String {
        let symbols = bits::symbol_len(data.len(), self.table());
        let pad = if self.padding.emits() {
            pad_len(symbols, BLOCK)
        } else {
            0
        };

        let mut result = String::with_capacity(symbols + pad);
        bits::pack(data, self.table(), &mut result);
        result.extend(std::iter::repeat_n(PAD, pad));
        result
    }

    fn try_decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let scanned = Scanner::PADDED.scan(text)?;
        bits::byte_len(scanned.body.len(), self.table())?;
        self.padding.check(scanned.body.len(), scanned.padding, BLOCK)?;
        bits::unpack(&scanned.body, self.table()).map_err(|e| scanned.locate(e))
    }
}
