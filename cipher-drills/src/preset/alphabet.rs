use crate::ring::Ring;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// The lowercase Latin alphabet every cipher position is measured against.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

lazy_static! {
    /// A static HashMap mapping a lowercase ASCII letter to its zero-based
    /// position in [`ALPHABET`].
    pub static ref CHAR_TO_INDEX_MAP: HashMap<char, i64> = ALPHABET
        .chars()
        .enumerate()
        .map(|(index, ch)| (ch, index as i64))
        .collect();

    /// A static HashMap mapping a position (0 to 25) back to its uppercase
    /// letter, the only case the cipher ever emits.
    pub static ref INDEX_TO_UPPER_CHAR_MAP: HashMap<i64, char> = CHAR_TO_INDEX_MAP
        .iter()
        .map(|(&ch, &index)| (index, ch.to_ascii_uppercase()))
        .collect();

    /// The ring Z_26 in which letter positions are shifted.
    pub static ref ALPHABET_RING: Ring = Ring {
        modulus: ALPHABET.len() as u64,
    };
}

/// Position of an ASCII letter in [`ALPHABET`], ignoring case.
///
/// Returns `None` for anything outside `[a-zA-Z]`.
pub fn letter_index(ch: char) -> Option<i64> {
    CHAR_TO_INDEX_MAP.get(&ch.to_ascii_lowercase()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_tables_cover_alphabet() {
        assert_eq!(CHAR_TO_INDEX_MAP.len(), 26);
        assert_eq!(INDEX_TO_UPPER_CHAR_MAP.len(), 26);
        assert_eq!(ALPHABET_RING.modulus(), 26);
        assert_eq!(CHAR_TO_INDEX_MAP[&'a'], 0);
        assert_eq!(CHAR_TO_INDEX_MAP[&'z'], 25);
        assert_eq!(INDEX_TO_UPPER_CHAR_MAP[&0], 'A');
        assert_eq!(INDEX_TO_UPPER_CHAR_MAP[&25], 'Z');
    }

    #[test]
    fn test_letter_index_is_case_insensitive() {
        assert_eq!(letter_index('h'), Some(7));
        assert_eq!(letter_index('H'), Some(7));
        assert_eq!(letter_index(' '), None);
        assert_eq!(letter_index('7'), None);
        assert_eq!(letter_index('é'), None);
    }

    #[quickcheck]
    fn prop_letter_index_matches_ascii_offset(ch: char) -> bool {
        match letter_index(ch) {
            Some(index) => {
                ch.is_ascii_alphabetic()
                    && index == (ch.to_ascii_lowercase() as u8 - b'a') as i64
                    && INDEX_TO_UPPER_CHAR_MAP[&index] == ch.to_ascii_uppercase()
            }
            None => !ch.is_ascii_alphabetic(),
        }
    }
}
