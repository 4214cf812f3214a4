//! Counts the characters two strings have in common.
//!
//! Comparison is case-insensitive: both strings are lower-cased before the
//! first one is turned into a character multiset.

use itertools::Itertools;

/// Returns the size of the multiset intersection of the lower-cased
/// characters of `s1` and `s2`.
///
/// The result does not depend on argument order.
///
/// # Example
///
/// ```
/// # use cipher_drills::common_chars::get_common_character_count;
/// // two "a"s and one "c"
/// assert_eq!(get_common_character_count("aabcc", "adcaa"), 3);
/// assert_eq!(get_common_character_count("", "abc"), 0);
/// ```
pub fn get_common_character_count(s1: &str, s2: &str) -> usize {
    let mut available = s1.to_lowercase().chars().counts();

    let mut common = 0;
    for ch in s2.to_lowercase().chars() {
        match available.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                common += 1;
            }
            _ => {}
        }
    }

    log::trace!(
        "common character count: {} (lengths {} / {})",
        common,
        s1.len(),
        s2.len()
    );

    common
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_shared_characters() {
        assert_eq!(get_common_character_count("aabcc", "adcaa"), 3);
        assert_eq!(get_common_character_count("zzzz", "zzzzzzz"), 4);
        assert_eq!(get_common_character_count("abca", "xyzbac"), 3);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(get_common_character_count("abc", "xyz"), 0);
        assert_eq!(get_common_character_count("", ""), 0);
        assert_eq!(get_common_character_count("abc", ""), 0);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(get_common_character_count("AaBb", "aabb"), 4);
        assert_eq!(get_common_character_count("ÄÖ", "äö"), 2);
    }

    #[test]
    fn test_non_letters_are_counted() {
        assert_eq!(get_common_character_count("a b!", "! ba"), 4);
    }

    #[quickcheck]
    fn prop_count_is_symmetric(s1: String, s2: String) -> bool {
        get_common_character_count(&s1, &s2) == get_common_character_count(&s2, &s1)
    }

    #[quickcheck]
    fn prop_count_is_bounded(s1: String, s2: String) -> bool {
        let bound = s1
            .to_lowercase()
            .chars()
            .count()
            .min(s2.to_lowercase().chars().count());
        get_common_character_count(&s1, &s2) <= bound
    }

    #[quickcheck]
    fn prop_string_shares_everything_with_itself(s: String) -> bool {
        get_common_character_count(&s, &s) == s.to_lowercase().chars().count()
    }
}
