//! Bit packing shared by every codec: bytes are read MSB-first and regrouped
//! into 4, 5 or 6 bit symbols, and back.

use crate::core::alphabet::Alphabet;

use super::errors::DecodeError;

/// Number of symbols `byte_len` bytes pack into, before any padding.
pub(crate) fn symbol_len(byte_len: usize, alphabet: &Alphabet) -> usize {
    (byte_len * 8).div_ceil(alphabet.bits() as usize)
}

/// Number of bytes `symbol_count` symbols unpack into.
///
/// Fails when the count leaves a whole symbol's worth of bits (or more) over,
/// which no byte count can produce: one trailing Base64 symbol, an odd Base16
/// symbol, one, three or six trailing Base32 symbols.
pub(crate) fn byte_len(symbol_count: usize, alphabet: &Alphabet) -> Result<usize, DecodeError> {
    let bits = alphabet.bits() as usize;
    let total_bits = symbol_count * bits;
    if total_bits % 8 >= bits {
        return Err(DecodeError::InvalidLength {
            actual: symbol_count,
            alphabet: alphabet.name(),
        });
    }
    Ok(total_bits / 8)
}

/// Appends the symbols for `data` to `out`. The final partial group is
/// left-aligned and zero filled.
pub(crate) fn pack(data: &[u8], alphabet: &Alphabet, out: &mut String) {
    let bits = alphabet.bits();
    let mask = (1u32 << bits) - 1;

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | u32::from(byte);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits {
            bits_in_buffer -= bits;
            let index = (bit_buffer >> bits_in_buffer) & mask;
            out.push(char::from(alphabet.symbol(index as u8)));
        }
        bit_buffer &= (1 << bits_in_buffer) - 1;
    }

    if bits_in_buffer > 0 {
        let index = (bit_buffer << (bits - bits_in_buffer)) & mask;
        out.push(char::from(alphabet.symbol(index as u8)));
    }
}

/// Unpacks cleaned symbols (no whitespace, no padding) into bytes.
///
/// `InvalidCharacter` positions are indices into `symbols`; the scanner maps
/// them back onto the caller's input.
pub(crate) fn unpack(symbols: &[u8], alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let bits = alphabet.bits();
    let mut result = Vec::with_capacity(byte_len(symbols.len(), alphabet)?);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;

    for (position, &symbol) in symbols.iter().enumerate() {
        let digit = alphabet
            .value_of_byte(symbol)
            .ok_or(DecodeError::InvalidCharacter {
                char: char::from(symbol),
                position,
            })?;

        bit_buffer = (bit_buffer << bits) | u32::from(digit);
        bits_in_buffer += bits;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((bit_buffer >> bits_in_buffer) as u8);
            bit_buffer &= (1 << bits_in_buffer) - 1;
        }
    }

    // Whatever is left never reached a full byte and must be zero fill.
    if bit_buffer != 0 {
        return Err(DecodeError::NonCanonical);
    }

    Ok(result)
}
