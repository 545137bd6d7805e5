use thiserror::Error;

/// Why a decode failed.
///
/// [`Encoding::decode`](crate::Encoding::decode) collapses every variant into
/// `None`; [`Encoding::try_decode`](crate::Encoding::try_decode) keeps them for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contains a character outside the alphabet.
    ///
    /// `position` counts characters of the original input, whitespace included.
    #[error("invalid character {char:?} at position {position}")]
    InvalidCharacter { char: char, position: usize },

    /// The symbol count cannot be produced by encoding whole bytes.
    #[error("invalid length: {actual} symbols do not form a valid {alphabet} encoding")]
    InvalidLength {
        actual: usize,
        alphabet: &'static str,
    },

    /// Padding is misplaced, missing where required, or of the wrong length.
    #[error("invalid padding")]
    InvalidPadding,

    /// The unused bits of the final symbol are not zero.
    #[error("non-canonical encoding: trailing bits are not zero")]
    NonCanonical,

    /// The Crockford check symbol does not match the decoded value.
    #[error("checksum mismatch: found check symbol {found:?}, computed {computed:?}")]
    ChecksumMismatch { found: char, computed: char },

    /// Nothing is left once whitespace is removed.
    #[error("cannot decode empty input")]
    EmptyInput,
}

/// Errors raised while loading or querying the codec registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read codec registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse codec registry: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("codec '{name}' not found{}", suggestion_hint(.suggestion))]
    CodecNotFound {
        name: String,
        suggestion: Option<String>,
    },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest registered codec name, if any is close enough to be a typo.
pub fn find_closest_codec<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // 1-2 character typos for short names, up to 3 for longer names
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.to_string())
}
