use serde::Deserialize;

use super::bits;
use super::errors::DecodeError;
use super::scanner::{PAD, Padding, Scanner, pad_len};
use crate::Encoding;
use crate::core::alphabet::{Alphabet, BASE32, BASE32_HEX, CROCKFORD};

/// Symbols in one Base32 block (five bytes).
const BLOCK: usize = 8;

/// Crockford check symbols, indexed by `value mod 37`. The first 32 are the
/// Crockford alphabet itself.
pub const CHECK_SYMBOLS: &[u8; 37] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ*~$=U";

const CHECK_MODULUS: u32 = 37;

/// Base32 variants. Padding applies to the RFC 4648 alphabets only;
/// Crockford is never padded and may carry a trailing check symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Base32 {
    /// `A-Z2-7`, RFC 4648 section 6.
    Standard {
        #[serde(default)]
        padding: Padding,
    },
    /// `0-9A-V`, RFC 4648 section 7.
    Hex {
        #[serde(default)]
        padding: Padding,
    },
    /// Douglas Crockford's alphabet, case-insensitive with `O`/`I`/`L`
    /// synonyms and `-` separators ignored on decode.
    Crockford {
        #[serde(default)]
        check_symbol: bool,
    },
}

impl Default for Base32 {
    fn default() -> Self {
        Self::standard()
    }
}

impl Base32 {
    pub const fn standard() -> Self {
        Base32::Standard {
            padding: Padding::Required,
        }
    }

    pub const fn hex() -> Self {
        Base32::Hex {
            padding: Padding::Required,
        }
    }

    pub const fn crockford() -> Self {
        Base32::Crockford {
            check_symbol: false,
        }
    }

    /// Sets the padding policy. Crockford ignores it.
    pub const fn with_padding(self, padding: Padding) -> Self {
        match self {
            Base32::Standard { .. } => Base32::Standard { padding },
            Base32::Hex { .. } => Base32::Hex { padding },
            crockford @ Base32::Crockford { .. } => crockford,
        }
    }

    /// Enables or disables the Crockford check symbol. Other variants
    /// ignore it. Empty input still encodes to an empty string.
    pub const fn with_check_symbol(self, check_symbol: bool) -> Self {
        match self {
            Base32::Crockford { .. } => Base32::Crockford { check_symbol },
            other => other,
        }
    }

    fn alphabet(&self) -> &'static Alphabet {
        match self {
            Base32::Standard { .. } => &BASE32,
            Base32::Hex { .. } => &BASE32_HEX,
            Base32::Crockford { .. } => &CROCKFORD,
        }
    }

    fn encoded_len(&self, data_len: usize) -> usize {
        let symbols = bits::symbol_len(data_len, self.alphabet());
        match self {
            Base32::Standard { padding } | Base32::Hex { padding } if padding.emits() => {
                symbols + pad_len(symbols, BLOCK)
            }
            Base32::Crockford { check_symbol: true } if data_len > 0 => symbols + 1,
            _ => symbols,
        }
    }

    fn decode_crockford(&self, text: &str, check_symbol: bool) -> Result<Vec<u8>, DecodeError> {
        let scanned = Scanner::CROCKFORD.scan(text)?;

        if !check_symbol {
            return bits::unpack(&scanned.body, &CROCKFORD).map_err(|e| scanned.locate(e));
        }

        let Some((&found, body)) = scanned.body.split_last() else {
            return Err(DecodeError::EmptyInput);
        };
        let found_value = check_value(found).ok_or_else(|| {
            scanned.locate(DecodeError::InvalidCharacter {
                char: char::from(found),
                position: body.len(),
            })
        })?;
        if body.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let decoded = bits::unpack(body, &CROCKFORD).map_err(|e| scanned.locate(e))?;
        let computed = checksum(&decoded);
        if computed != found_value {
            return Err(DecodeError::ChecksumMismatch {
                found: char::from(found),
                computed: char::from(CHECK_SYMBOLS[computed as usize]),
            });
        }
        Ok(decoded)
    }
}

/// Value of a Crockford check symbol, accepting the decode synonyms.
fn check_value(symbol: u8) -> Option<u8> {
    CROCKFORD.value_of_byte(symbol).or(match symbol {
        b'*' => Some(32),
        b'~' => Some(33),
        b'$' => Some(34),
        b'=' => Some(35),
        b'U' | b'u' => Some(36),
        _ => None,
    })
}

/// `data` read as one big-endian unsigned integer, modulo 37.
fn checksum(data: &[u8]) -> u8 {
    let remainder = data
        .iter()
        .fold(0u32, |acc, &byte| ((acc << 8) | u32::from(byte)) % CHECK_MODULUS);
    remainder as u8
}

/// The Crockford check symbol for `data`.
///
/// Appending it to a Crockford encoding of `data` yields text that a
/// `Base32::Crockford { check_symbol: true }` codec verifies.
pub fn check_symbol(data: &[u8]) -> char {
    char::from(CHECK_SYMBOLS[checksum(data) as usize])
}

impl Encoding for Base32 {
    fn name(&self) -> &'static str {
        self.alphabet().name()
    }

    fn encode(&self, data: &[u8]) -> String {
        let mut result = String::with_capacity(self.encoded_len(data.len()));
        bits::pack(data, self.alphabet(), &mut result);

        match self {
            Base32::Standard { padding } | Base32::Hex { padding } if padding.emits() => {
                let pad = pad_len(result.len(), BLOCK);
                result.extend(std::iter::repeat_n(PAD, pad));
            }
            Base32::Crockford { check_symbol: true } if !data.is_empty() => {
                result.push(check_symbol(data));
            }
            _ => {}
        }

        result
    }

    fn try_decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let padding = match *self {
            Base32::Standard { padding } | Base32::Hex { padding } => padding,
            Base32::Crockford { check_symbol } => return self.decode_crockford(text, check_symbol),
        };

        let scanned = Scanner::PADDED.scan(text)?;
        bits::byte_len(scanned.body.len(), self.alphabet())?;
        padding.check(scanned.body.len(), scanned.padding, BLOCK)?;
        bits::unpack(&scanned.body, self.alphabet()).map_err(|e| scanned.locate(e))
    }
}
