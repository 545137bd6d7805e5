use serde::Deserialize;

use super::bits;
use super::errors::DecodeError;
use super::scanner::Scanner;
use crate::Encoding;
use crate::core::alphabet::{Alphabet, BASE16_LOWER, BASE16_UPPER};

/// Letter case of Base16 output. Decoding accepts either case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    #[default]
    Upper,
    Lower,
}

/// RFC 4648 Base16 (hex): two symbols per byte, no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Base16 {
    #[serde(default)]
    case: Case,
}

impl Base16 {
    pub const fn new(case: Case) -> Self {
        Base16 { case }
    }

    pub const fn upper() -> Self {
        Self::new(Case::Upper)
    }

    pub const fn lower() -> Self {
        Self::new(Case::Lower)
    }

    pub fn case(&self) -> Case {
        self.case
    }

    fn alphabet(&self) -> &'static Alphabet {
        match self.case {
            Case::Upper => &BASE16_UPPER,
            Case::Lower => &BASE16_LOWER,
        }
    }
}

impl Encoding for Base16 {
    fn name(&self) -> &'static str {
        "base16"
    }

    fn encode(&self, data: &[u8]) -> String {
        let alphabet = self.alphabet();
        let mut result = String::with_capacity(data.len() * 2);
        bits::pack(data, alphabet, &mut result);
        result
    }

    fn try_decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let scanned = Scanner::PADDED.scan(text)?;
        if scanned.padding > 0 {
            return Err(DecodeError::InvalidPadding);
        }
        bits::unpack(&scanned.body, self.alphabet()).map_err(|e| scanned.locate(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEAD_BEEF: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

    #[test]
    fn test_encode_cases() {
        assert_eq!(Base16::upper().encode(&DEAD_BEEF), "DEADBEEF");
        assert_eq!(Base16::lower().encode(&DEAD_BEEF), "deadbeef");
        assert_eq!(Base16::default().encode(b""), "");
    }

    #[test]
    fn test_decode_either_case() {
        for codec in [Base16::upper(), Base16::lower()] {
            assert_eq!(codec.decode("DEADBEEF").unwrap(), DEAD_BEEF);
            assert_eq!(codec.decode("deadbeef").unwrap(), DEAD_BEEF);
            assert_eq!(codec.decode("DeAdBeEf").unwrap(), DEAD_BEEF);
        }
    }

    #[test]
    fn test_decode_interior_space() {
        assert_eq!(Base16::upper().decode("DEAD BEEF").unwrap(), DEAD_BEEF);
        assert_eq!(Base16::upper().decode("\tDE\nAD\r\nBE EF \n").unwrap(), DEAD_BEEF);
    }

    #[test]
    fn test_decode_failures() {
        let codec = Base16::upper();
        assert_eq!(codec.try_decode("DEA"), Err(DecodeError::InvalidLength {
            actual: 3,
            alphabet: "base16"
        }));
        assert_eq!(codec.try_decode("DEADBEEG"), Err(DecodeError::InvalidCharacter {
            char: 'G',
            position: 7
        }));
        assert_eq!(codec.try_decode("DEAD=="), Err(DecodeError::InvalidPadding));
        assert_eq!(codec.try_decode("=="), Err(DecodeError::InvalidPadding));
        assert_eq!(codec.try_decode("  "), Err(DecodeError::EmptyInput));
        assert_eq!(codec.decode("0x12"), None);
    }
}
