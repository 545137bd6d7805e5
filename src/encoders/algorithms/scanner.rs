use serde::Deserialize;

use super::errors::DecodeError;

pub(crate) const PAD: char = '=';

/// How a codec treats `=` padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Encode pads the final block; decode requires exactly that padding.
    #[default]
    Required,
    /// Encode pads the final block; decode also accepts the padding left off.
    Optional,
    /// Encode never pads; decode accepts exact padding or none.
    Omitted,
}

impl Padding {
    pub fn emits(self) -> bool {
        !matches!(self, Padding::Omitted)
    }

    /// Checks `padding` pad characters against a body of `body_len` symbols
    /// grouped in blocks of `block` symbols.
    pub(crate) fn check(self, body_len: usize, padding: usize, block: usize) -> Result<(), DecodeError> {
        let expected = pad_len(body_len, block);
        match padding {
            0 if expected == 0 || self != Padding::Required => Ok(()),
            n if n == expected => Ok(()),
            _ => Err(DecodeError::InvalidPadding),
        }
    }
}

/// Number of pad characters that complete a final group of `symbols`.
pub(crate) fn pad_len(symbols: usize, block: usize) -> usize {
    (block - symbols % block) % block
}

/// Decode-time cleanup shared by every codec.
///
/// Drops ASCII whitespace wherever it occurs and splits the rest into body
/// symbols and one trailing run of `=`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scanner {
    /// Treat `=` as padding. Crockford leaves it in the body, where it can
    /// only be valid as the check symbol.
    padding: bool,
    /// Also drop `-` separators.
    hyphens: bool,
}

impl Scanner {
    pub(crate) const PADDED: Scanner = Scanner {
        padding: true,
        hyphens: false,
    };

    pub(crate) const CROCKFORD: Scanner = Scanner {
        padding: false,
        hyphens: true,
    };

    fn skips(&self, c: char) -> bool {
        c.is_ascii_whitespace() || c == '\u{0B}' || (self.hyphens && c == '-')
    }

    pub(crate) fn scan<'a>(&self, input: &'a str) -> Result<Scanned<'a>, DecodeError> {
        let mut body = Vec::with_capacity(input.len());
        let mut padding = 0;

        for (position, c) in input.chars().enumerate() {
            if self.skips(c) {
                continue;
            }
            if self.padding && c == PAD {
                padding += 1;
                continue;
            }
            if padding > 0 {
                return Err(DecodeError::InvalidPadding);
            }
            if !c.is_ascii() {
                return Err(DecodeError::InvalidCharacter { char: c, position });
            }
            body.push(c as u8);
        }

        match (body.is_empty(), padding) {
            (true, 0) => Err(DecodeError::EmptyInput),
            (true, _) => Err(DecodeError::InvalidPadding),
            _ => Ok(Scanned {
                input,
                scanner: *self,
                body,
                padding,
            }),
        }
    }
}

/// Output of [`Scanner::scan`].
#[derive(Debug)]
pub(crate) struct Scanned<'a> {
    input: &'a str,
    scanner: Scanner,
    pub(crate) body: Vec<u8>,
    pub(crate) padding: usize,
}

impl Scanned<'_> {
    /// Rewrites an `InvalidCharacter` position from a body index to a
    /// character index of the original input.
    pub(crate) fn locate(&self, err: DecodeError) -> DecodeError {
        match err {
            DecodeError::InvalidCharacter { char, position } => {
                let position = self
                    .input
                    .chars()
                    .enumerate()
                    .filter(|(_, c)| !self.scanner.skips(*c) && !(self.scanner.padding && *c == PAD))
                    .nth(position)
                    .map_or(position, |(original, _)| original);
                DecodeError::InvalidCharacter { char, position }
            }
            other => other,
        }
    }
}
