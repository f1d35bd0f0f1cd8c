//! Static language dictionaries.
//!
//! - [`abbreviations`] - Abbreviations that should not end a sentence
//! - [`irregular_nouns`] - Irregular singular/plural noun pairs

pub mod abbreviations;
pub mod irregular_nouns;
