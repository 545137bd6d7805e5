//! Property tests over every built-in codec.

use base_rfc::{Base16, Base32, Base64, Codec, CodecRegistry, Encoding, check_symbol};
use proptest::prelude::*;

fn registry_codecs() -> Vec<Codec> {
    let registry = CodecRegistry::load_default().unwrap();
    registry
        .names()
        .into_iter()
        .map(|name| registry.codec(name).unwrap())
        .collect()
}

fn whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn round_trip(data in prop::collection::vec(any::<u8>(), 1..256)) {
        for codec in registry_codecs() {
            let encoded = codec.encode(&data);
            prop_assert_eq!(codec.decode(&encoded), Some(data.clone()), "{}", codec.name());
        }
    }

    #[test]
    fn whitespace_is_ignored(
        data in prop::collection::vec(any::<u8>(), 1..64),
        inserts in prop::collection::vec((any::<prop::sample::Index>(), whitespace()), 0..8),
    ) {
        for codec in registry_codecs() {
            let encoded = codec.encode(&data);
            let mut chars: Vec<String> = encoded.chars().map(String::from).collect();
            for (index, ws) in &inserts {
                let at = index.index(chars.len() + 1);
                chars.insert(at, ws.clone());
            }
            let spaced: String = chars.concat();
            prop_assert_eq!(codec.decode(&spaced), Some(data.clone()), "{}", codec.name());
        }
    }

    #[test]
    fn base16_matches_hex_crate(data in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(Base16::upper().encode(&data), hex::encode_upper(&data));
        prop_assert_eq!(Base16::lower().encode(&data), hex::encode(&data));
    }

    #[test]
    fn encoded_lengths(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let len = data.len();
        prop_assert_eq!(Base64::standard().encode(&data).len(), len.div_ceil(3) * 4);
        prop_assert_eq!(Base64::url_safe().encode(&data).len(), (len * 8).div_ceil(6));
        prop_assert_eq!(Base32::standard().encode(&data).len(), len.div_ceil(5) * 8);
        prop_assert_eq!(Base32::crockford().encode(&data).len(), (len * 8).div_ceil(5));
        prop_assert_eq!(Base16::upper().encode(&data).len(), len * 2);
    }

    #[test]
    fn crockford_check_symbol_verifies(data in prop::collection::vec(any::<u8>(), 1..64)) {
        let plain = Base32::crockford();
        let checked = Base32::crockford().with_check_symbol(true);
        let text = format!("{}{}", plain.encode(&data), check_symbol(&data));
        prop_assert_eq!(checked.decode(&text), Some(data.clone()));
        prop_assert_eq!(checked.encode(&data), text);
    }

    #[test]
    fn crockford_detects_single_symbol_change(
        data in prop::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        delta in 1u8..32,
    ) {
        let checked = Base32::crockford().with_check_symbol(true);
        let encoded = checked.encode(&data);
        let body = &encoded[..encoded.len() - 1];
        let symbol = &encoded[encoded.len() - 1..];

        // The last body symbol may carry zero-fill bits; only change data-bearing ones.
        let at = index.index(body.len() - 1);
        let alphabet = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
        let original = alphabet.iter().position(|&c| c == body.as_bytes()[at]).unwrap();
        let replaced = char::from(alphabet[(original + usize::from(delta)) % 32]);

        let mut altered = String::with_capacity(encoded.len());
        altered.push_str(&body[..at]);
        altered.push(replaced);
        altered.push_str(&body[at + 1..]);
        altered.push_str(symbol);

        prop_assert_eq!(checked.decode(&altered), None);
    }

    #[test]
    fn decode_never_panics(text in "\\PC{0,64}") {
        for codec in registry_codecs() {
            let _ = codec.decode(&text);
        }
    }
}
