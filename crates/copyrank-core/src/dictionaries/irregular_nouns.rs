//! Irregular singular/plural noun pairs.
//!
//! Backs [`crate::morphology::MorphologyData::english`]: nouns whose plural
//! cannot be derived with regular suffix rules.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Irregular noun pairs as `(singular, plural)`.
pub const IRREGULAR_NOUN_PAIRS: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("cactus", "cacti"),
    ("child", "children"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("diagnosis", "diagnoses"),
    ("die", "dice"),
    ("focus", "foci"),
    ("foot", "feet"),
    ("fungus", "fungi"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hypothesis", "hypotheses"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("louse", "lice"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("nucleus", "nuclei"),
    ("oasis", "oases"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("radius", "radii"),
    ("shelf", "shelves"),
    ("stimulus", "stimuli"),
    ("thesis", "theses"),
    ("thief", "thieves"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Singular → plural lookup.
pub static SINGULAR_TO_PLURAL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_NOUN_PAIRS.iter().copied().collect());

/// Plural → singular lookup.
pub static PLURAL_TO_SINGULAR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_NOUN_PAIRS.iter().map(|&(s, p)| (p, s)).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions_resolve() {
        assert_eq!(SINGULAR_TO_PLURAL.get("child"), Some(&"children"));
        assert_eq!(PLURAL_TO_SINGULAR.get("children"), Some(&"child"));
    }
}
