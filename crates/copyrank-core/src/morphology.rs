//! Morphological form tables.
//!
//! [`MorphologyData`] answers one question: given a word form, what is its
//! morphological counterpart (singular for a plural, plural for a singular)?
//! Tables can be built explicitly from pairs for any language, or from the
//! built-in English rules plus the irregular-noun dictionary.

use std::collections::HashMap;

use crate::dictionaries::irregular_nouns::{PLURAL_TO_SINGULAR, SINGULAR_TO_PLURAL};

/// A word → counterpart-form table.
///
/// Absent data is represented by not constructing a table at all: the
/// researcher holds an `Option<&MorphologyData>` and research that needs
/// morphology returns empty when it is `None`.
#[derive(Debug, Clone, Default)]
pub struct MorphologyData {
    pairs: HashMap<String, String>,
    english_rules: bool,
}

impl MorphologyData {
    /// Build a table from explicit `(form, counterpart)` pairs.
    ///
    /// Both directions are registered, so one pair covers the round trip.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut table = HashMap::new();
        for (form, counterpart) in pairs {
            let form = form.into().to_lowercase();
            let counterpart = counterpart.into().to_lowercase();
            table.insert(form.clone(), counterpart.clone());
            table.insert(counterpart, form);
        }
        Self {
            pairs: table,
            english_rules: false,
        }
    }

    /// The built-in English table: irregular nouns plus regular suffix rules.
    pub fn english() -> Self {
        Self {
            pairs: HashMap::new(),
            english_rules: true,
        }
    }

    /// Look up the morphological counterpart of `word`.
    ///
    /// Explicit pairs win over rule-derived forms. Returns `None` when the
    /// table has no answer for this word.
    pub fn lookup(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();
        if let Some(counterpart) = self.pairs.get(&word) {
            return Some(counterpart.clone());
        }
        if self.english_rules {
            return english_counterpart(&word);
        }
        None
    }
}

/// Counterpart of an English noun via irregulars, then regular suffix rules.
fn english_counterpart(word: &str) -> Option<String> {
    if let Some(plural) = SINGULAR_TO_PLURAL.get(word) {
        return Some((*plural).to_string());
    }
    if let Some(singular) = PLURAL_TO_SINGULAR.get(word) {
        return Some((*singular).to_string());
    }

    if looks_plural(word) {
        let singular = singularize(word);
        if singular.len() >= 2 && singular != word {
            return Some(singular);
        }
    }
    Some(pluralize(word))
}

/// Whether a word form reads as a regular English plural.
fn looks_plural(word: &str) -> bool {
    word.len() > 2 && word.ends_with('s') && !word.ends_with("ss")
}

/// Regular English pluralization.
pub(crate) fn pluralize(word: &str) -> String {
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    if let Some(base) = word.strip_suffix('y')
        && base.chars().last().is_some_and(|c| !is_vowel(c))
    {
        return format!("{base}ies");
    }
    format!("{word}s")
}

/// Regular English singularization. Returns the input unchanged when no
/// plural suffix applies.
pub(crate) fn singularize(word: &str) -> String {
    if let Some(base) = word.strip_suffix("ies")
        && base.len() >= 2
    {
        return format!("{base}y");
    }
    if let Some(base) = word.strip_suffix("es")
        && (base.ends_with('s')
            || base.ends_with('x')
            || base.ends_with('z')
            || base.ends_with("ch")
            || base.ends_with("sh"))
    {
        return base.to_string();
    }
    if let Some(base) = word.strip_suffix('s')
        && !base.ends_with('s')
    {
        return base.to_string();
    }
    word.to_string()
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
