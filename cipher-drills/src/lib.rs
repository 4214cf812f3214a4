//! Small text and matrix drills: a keyword cipher, a shared-character
//! counter and a masked matrix sum.

pub mod common_chars;
pub mod errors;
pub mod matrix;
pub mod preset;
pub mod ring;
pub mod vigenere;

pub use common_chars::get_common_character_count;
pub use errors::CipherDrillsError;
pub use matrix::{Matrix, get_matrix_elements_sum, masked_columns};
pub use vigenere::CipheringMachine;
