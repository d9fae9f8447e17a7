//! Shared leaf types for haiku validation.
//!
//! This crate holds the pieces every other crate in the workspace consumes:
//!
//! - [`character`] -- vowel-class membership and ASCII normalization
//! - [`pattern`] -- the fixed 5-7-5 syllable pattern
//! - [`verdict`] -- the structured validation failure type
//!
//! It carries no validation logic of its own; the rule module lives in the
//! `haiku-en` crate.

pub mod character;
pub mod pattern;
pub mod verdict;
