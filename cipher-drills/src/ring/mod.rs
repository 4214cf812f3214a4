//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_k and performing modular arithmetic.

pub mod math;

pub use math::Ring;
