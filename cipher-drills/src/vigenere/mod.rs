//! # Vigenère Ciphering Machine
//!
//! A keyword-driven polyalphabetic substitution over the Latin alphabet.
//! Letters are shifted in Z_26 by the matching keyword letter, everything
//! else is copied through untouched and does not consume keyword letters.
//! Output letters are always upper case.

use crate::errors::CipherDrillsError;
use crate::preset::alphabet::{ALPHABET_RING, INDEX_TO_UPPER_CHAR_MAP, letter_index};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Position assigned to keyword characters that are not in the alphabet.
const NON_LETTER_SHIFT: i64 = -1;

/// Which way the keyword shift is applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Ciphering machine whose only setting is the output orientation.
///
/// A direct machine (`orientation_is_clear == true`) returns the transformed
/// text as built; a reverse machine returns it reversed character by
/// character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CipheringMachine {
    orientation_is_clear: bool,
}

impl Default for CipheringMachine {
    fn default() -> Self {
        Self::direct()
    }
}

impl CipheringMachine {
    pub fn new(orientation_is_clear: bool) -> Self {
        Self {
            orientation_is_clear,
        }
    }

    /// A machine that returns its output in reading order.
    pub fn direct() -> Self {
        Self::new(true)
    }

    /// A machine that returns its output reversed.
    pub fn reverse() -> Self {
        Self::new(false)
    }

    pub fn orientation_is_clear(&self) -> bool {
        self.orientation_is_clear
    }

    /// Encrypts `text` with `keyword`.
    ///
    /// # Errors
    ///
    /// Returns `CipherDrillsError::InvalidArgument` if `keyword` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use cipher_drills::vigenere::CipheringMachine;
    /// let direct = CipheringMachine::direct();
    /// assert_eq!(
    ///     direct.encrypt("attack at dawn!", "alphonse").unwrap(),
    ///     "AEIHQX SX DLLU!"
    /// );
    ///
    /// let reverse = CipheringMachine::reverse();
    /// assert_eq!(
    ///     reverse.encrypt("attack at dawn!", "alphonse").unwrap(),
    ///     "!ULLD XS XQHIEA"
    /// );
    /// ```
    pub fn encrypt(&self, text: &str, keyword: &str) -> Result<String, CipherDrillsError> {
        self.process(text, keyword, Direction::Encrypt)
    }

    /// Decrypts `text` with `keyword`.
    ///
    /// Since the output is always upper case, decrypting recovers the
    /// plaintext only up to letter case.
    ///
    /// # Errors
    ///
    /// Same as [`CipheringMachine::encrypt`].
    ///
    /// # Example
    ///
    /// ```
    /// # use cipher_drills::vigenere::CipheringMachine;
    /// let direct = CipheringMachine::direct();
    /// assert_eq!(
    ///     direct.decrypt("AEIHQX SX DLLU!", "alphonse").unwrap(),
    ///     "ATTACK AT DAWN!"
    /// );
    /// ```
    pub fn decrypt(&self, text: &str, keyword: &str) -> Result<String, CipherDrillsError> {
        self.process(text, keyword, Direction::Decrypt)
    }

    /// Encrypts dynamically typed arguments, both of which must be JSON strings.
    ///
    /// # Errors
    ///
    /// Returns `CipherDrillsError::InvalidArgument` if either argument is not a
    /// string, and otherwise whatever [`CipheringMachine::encrypt`] returns.
    pub fn encrypt_value(&self, text: &Value, keyword: &Value) -> Result<String, CipherDrillsError> {
        let (text, keyword) = expect_strings(text, keyword)?;
        self.encrypt(text, keyword)
    }

    /// Decrypts dynamically typed arguments, both of which must be JSON strings.
    ///
    /// # Errors
    ///
    /// Same as [`CipheringMachine::encrypt_value`].
    pub fn decrypt_value(&self, text: &Value, keyword: &Value) -> Result<String, CipherDrillsError> {
        let (text, keyword) = expect_strings(text, keyword)?;
        self.decrypt(text, keyword)
    }

    /// Serializes the machine settings to JSON.
    pub fn to_json(&self) -> Result<String, CipherDrillsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a machine from settings produced by [`CipheringMachine::to_json`].
    pub fn from_json(json: &str) -> Result<Self, CipherDrillsError> {
        Ok(serde_json::from_str(json)?)
    }

    fn process(
        &self,
        text: &str,
        keyword: &str,
        direction: Direction,
    ) -> Result<String, CipherDrillsError> {
        let shifts = keyword_shifts(keyword)?;

        log::trace!(
            "{:?} {} chars with a {}-char keyword (clear orientation: {})",
            direction,
            text.chars().count(),
            shifts.len(),
            self.orientation_is_clear
        );

        let mut output = String::with_capacity(text.len());
        let mut key_index = 0;

        for ch in text.chars() {
            let Some(text_pos) = letter_index(ch) else {
                output.push(ch);
                continue;
            };

            let key_pos = shifts[key_index % shifts.len()];
            let shifted = match direction {
                Direction::Encrypt => ALPHABET_RING.add(text_pos, key_pos),
                Direction::Decrypt => ALPHABET_RING.sub(text_pos, key_pos),
            };

            output.push(INDEX_TO_UPPER_CHAR_MAP[&shifted]);
            key_index += 1;
        }

        if self.orientation_is_clear {
            Ok(output)
        } else {
            Ok(output.chars().rev().collect())
        }
    }
}

/// Resolves every keyword character to its alphabet position.
///
/// A character outside `[a-zA-Z]` resolves to position -1, which the ring
/// normalizes to a shift of 25.
fn keyword_shifts(keyword: &str) -> Result<Vec<i64>, CipherDrillsError> {
    if keyword.is_empty() {
        log::debug!("rejecting empty keyword");
        return Err(CipherDrillsError::InvalidArgument(
            "keyword must not be empty".to_string(),
        ));
    }

    Ok(keyword
        .chars()
        .map(|ch| letter_index(ch).unwrap_or(NON_LETTER_SHIFT))
        .collect())
}

fn expect_strings<'a>(
    text: &'a Value,
    keyword: &'a Value,
) -> Result<(&'a str, &'a str), CipherDrillsError> {
    match (text.as_str(), keyword.as_str()) {
        (Some(text), Some(keyword)) => Ok((text, keyword)),
        _ => {
            log::debug!("rejecting non-string arguments: {} / {}", text, keyword);
            Err(CipherDrillsError::InvalidArgument(
                "text and keyword must both be strings".to_string(),
            ))
        }
    }
}
