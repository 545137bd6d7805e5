/// Marks a byte that no symbol value maps from.
const INVALID: u8 = 0xFF;

/// An RFC 4648 style alphabet: `2^bits` canonical ASCII symbols plus the
/// decode-side lookup table.
///
/// The lookup table may accept more characters than the canonical set
/// (the other letter case, Crockford's `O`/`I`/`L` look-alikes). Those are
/// synonyms: they decode to the same value but are never produced by encoding.
#[derive(Debug)]
pub struct Alphabet {
    name: &'static str,
    symbols: &'static [u8],
    values: [u8; 128],
    bits: u32,
}

impl Alphabet {
    /// Builds an alphabet at compile time.
    ///
    /// # Panics
    ///
    /// Panics (during const evaluation) if the symbol count is not 16, 32 or
    /// 64, if a symbol is not ASCII, or if a canonical symbol is repeated.
    const fn new(
        name: &'static str,
        symbols: &'static [u8],
        synonyms: &[(u8, u8)],
        fold_case: bool,
    ) -> Self {
        let base = symbols.len();
        assert!(
            base == 16 || base == 32 || base == 64,
            "alphabet size must be 16, 32 or 64"
        );

        let mut values = [INVALID; 128];
        let mut i = 0;
        while i < base {
            let c = symbols[i];
            assert!(c.is_ascii(), "alphabet symbols must be ASCII");
            assert!(values[c as usize] == INVALID, "duplicate alphabet symbol");
            values[c as usize] = i as u8;
            i += 1;
        }

        if fold_case {
            let mut i = 0;
            while i < base {
                let c = symbols[i];
                if c.is_ascii_alphabetic() && values[(c ^ 0x20) as usize] == INVALID {
                    values[(c ^ 0x20) as usize] = i as u8;
                }
                i += 1;
            }
        }

        let mut j = 0;
        while j < synonyms.len() {
            let (c, value) = synonyms[j];
            assert!((value as usize) < base, "synonym value out of range");
            values[c as usize] = value;
            j += 1;
        }

        Alphabet {
            name,
            symbols,
            values,
            bits: base.trailing_zeros(),
        }
    }

    /// Short name used in diagnostics (`"base64url"`, `"crockford"`, ...).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of canonical symbols.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Bits carried by one symbol: 4, 5 or 6.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns the canonical character for `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below [`Alphabet::base`].
    pub fn char_of(&self, value: u8) -> char {
        self.symbols[value as usize] as char
    }

    /// Returns the value of `c`, accepting synonyms.
    pub fn value_of(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.value_of_byte(c as u8)
        } else {
            None
        }
    }

    pub(crate) fn value_of_byte(&self, b: u8) -> Option<u8> {
        match self.values.get(b as usize) {
            Some(&INVALID) | None => None,
            Some(&value) => Some(value),
        }
    }

    pub(crate) fn symbol(&self, value: u8) -> u8 {
        self.symbols[value as usize]
    }
}

const CROCKFORD_SYNONYMS: &[(u8, u8)] = &[
    (b'O', 0),
    (b'o', 0),
    (b'I', 1),
    (b'i', 1),
    (b'L', 1),
    (b'l', 1),
];

pub static BASE16_UPPER: Alphabet = Alphabet::new("base16", b"0123456789ABCDEF", &[], true);

pub static BASE16_LOWER: Alphabet = Alphabet::new("base16", b"0123456789abcdef", &[], true);

pub static BASE32: Alphabet =
    Alphabet::new("base32", b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", &[], true);

/// "Extended hex" alphabet from RFC 4648 section 7.
pub static BASE32_HEX: Alphabet =
    Alphabet::new("base32hex", b"0123456789ABCDEFGHIJKLMNOPQRSTUV", &[], true);

pub static CROCKFORD: Alphabet = Alphabet::new(
    "crockford",
    b"0123456789ABCDEFGHJKMNPQRSTVWXYZ",
    CROCKFORD_SYNONYMS,
    true,
);

pub static BASE64: Alphabet = Alphabet::new(
    "base64",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    &[],
    false,
);

pub static BASE64_URL_SAFE: Alphabet = Alphabet::new(
    "base64url",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    &[],
    false,
);
