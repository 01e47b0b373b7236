//! Shared building blocks for the typo spell-checking engine.
//!
//! - [`character`] -- one-to-one case mapping and word-character classification
//! - [`case`] -- case-pattern detection and the case variants tried by the checker
//! - [`enums`] -- affix kinds, flag encodings and well-known affix-file keywords

pub mod case;
pub mod character;
pub mod enums;
