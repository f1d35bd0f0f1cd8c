//! Abbreviation dictionary for sentence boundary detection.
//!
//! A period after one of these words does not end a sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that should not trigger sentence breaks.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "hon", "capt", "col", "gen", "lt",
        "sgt", "sen", "rep", "gov", "pres",
    ]);

    // Common abbreviations
    set.extend(["etc", "vs", "e.g", "i.e", "cf", "et al", "n.b", "p.s", "approx"]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
        "nov", "dec", "mon", "tue", "wed", "thu", "fri", "sat", "sun",
    ]);

    // Locations
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "dept", "u.s", "u.k", "u.s.a", "e.u",
    ]);

    // Business
    set.extend(["inc", "corp", "ltd", "llc", "co", "intl"]);

    // Measurements and references
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "mi", "vol", "no", "pp",
        "fig", "ch", "min", "max", "avg",
    ]);

    set
});

/// Check if a word is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    ABBREVIATIONS.contains(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_titles() {
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("dr."));
        assert!(is_abbreviation("Mrs"));
    }

    #[test]
    fn rejects_ordinary_words() {
        assert!(!is_abbreviation("keyword"));
        assert!(!is_abbreviation("pots"));
    }
}
