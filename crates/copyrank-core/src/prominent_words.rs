//! Prominent-word extraction for link suggestions.
//!
//! Ranks word/stem clusters by document-wide salience. Words from the
//! paper's attributes (keyword, synonyms, title, meta description,
//! subheadings) weigh three times a body occurrence: one mention in a title
//! is a far stronger signal than one mention in running text.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::morphology::MorphologyData;
use crate::paper::Paper;
use crate::stemmer::Stemmer;
use crate::text;

/// Below this body word count, extraction is skipped entirely.
const MIN_TEXT_LENGTH: usize = 100;

/// Occurrence multiplier for attribute-sourced words.
const ATTRIBUTE_BOOST: usize = 3;

/// Minimum combined occurrences when morphology data is available.
///
/// Morphology-aware stemming folds more variants into each stem, so genuine
/// prominence needs more raw hits; this also keeps a single boosted
/// attribute hit (1 × 3 = 3) below the bar.
const MIN_OCCURRENCES_WITH_MORPHOLOGY: usize = 4;

/// Minimum combined occurrences without morphology data.
const MIN_OCCURRENCES_WITHOUT_MORPHOLOGY: usize = 2;

/// Cap on the returned list, so large articles do not produce endless
/// suggestions.
const MAX_PROMINENT_WORDS: usize = 100;

/// One distinct word/stem cluster with its salience data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProminentWord {
    /// The stem shared by every collapsed variant.
    stem: String,
    /// The canonical display word.
    word: String,
    /// Combined (possibly boosted) occurrence count.
    occurrences: usize,
    /// Salience weight; tracks `occurrences`.
    weight: f64,
}

impl ProminentWord {
    /// Create a cluster for one distinct word.
    pub fn new<S: Into<String>>(word: S, stem: S, occurrences: usize) -> Self {
        Self {
            stem: stem.into(),
            word: word.into(),
            occurrences,
            weight: occurrences as f64,
        }
    }

    /// The stem shared by every collapsed variant.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The canonical display word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Combined occurrence count.
    pub const fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Salience weight.
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Multiply the occurrence count (the attribute boost).
    pub fn rescale_occurrences(&mut self, factor: usize) {
        self.occurrences *= factor;
        self.weight = self.occurrences as f64;
    }
}

/// The outcome of prominent-word extraction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProminentWordsResult {
    /// Ranked prominent words, at most 100.
    pub prominent_words: Vec<ProminentWord>,
    /// Whether the paper has a meta description.
    pub has_meta_description: bool,
    /// Whether the paper has a title.
    pub has_title: bool,
}

/// Extract the prominent words of a paper.
///
/// `function_words` is threaded explicitly so concurrent extractions with
/// different lists are safe. `morphology` only gates the minimum-occurrence
/// threshold; stem normalization itself lives in `stemmer`.
#[tracing::instrument(skip_all, fields(text_len = paper.text().len()))]
pub fn extract(
    paper: &Paper,
    stemmer: &dyn Stemmer,
    function_words: &HashSet<&str>,
    morphology: Option<&MorphologyData>,
) -> ProminentWordsResult {
    let body = paper.text();
    let mut result = ProminentWordsResult {
        prominent_words: Vec::new(),
        has_meta_description: paper.has_description(),
        has_title: paper.has_title(),
    };

    // Suggestions are not worth computing for short documents.
    if text::count_words(body) < MIN_TEXT_LENGTH {
        return result;
    }

    let subheadings = text::get_subheadings(body);
    let attributes = [
        paper.keyword().to_string(),
        paper.synonyms().join(" "),
        paper.title().to_string(),
        paper.description().to_string(),
        subheadings.join(" "),
    ]
    .join(" ");

    let abbreviations = retrieve_abbreviations(&format!("{body} {attributes}"));

    // Subheadings already feed the attribute corpus; strip them from the
    // body so their words are not scanned twice.
    let body_words = candidate_words(
        &text::remove_subheadings(body),
        &abbreviations,
        stemmer,
        function_words,
    );
    let mut attribute_words =
        candidate_words(&attributes, &abbreviations, stemmer, function_words);

    for word in &mut attribute_words {
        word.rescale_occurrences(ATTRIBUTE_BOOST);
    }

    let mut collapsed = collapse_on_stem(attribute_words.into_iter().chain(body_words));
    sort_prominent_words(&mut collapsed);

    let minimum = if morphology.is_some() {
        MIN_OCCURRENCES_WITH_MORPHOLOGY
    } else {
        MIN_OCCURRENCES_WITHOUT_MORPHOLOGY
    };
    collapsed.retain(|word| word.occurrences >= minimum);
    collapsed.truncate(MAX_PROMINENT_WORDS);

    result.prominent_words = collapsed;
    result
}

/// Detect abbreviations: short all-caps tokens like `NASA` or `SEO`.
///
/// Detected abbreviations bypass function-word filtering and stemming so
/// they are not merged with an unrelated common stem.
pub fn retrieve_abbreviations(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| {
            let length = token.chars().count();
            (2..=4).contains(&length)
                && token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
                && token.chars().any(|c| c.is_ascii_uppercase())
        })
        .map(str::to_lowercase)
        .collect()
}

/// Extract candidate words from one corpus: one [`ProminentWord`] per
/// distinct surface form, counted and stemmed.
fn candidate_words(
    text: &str,
    abbreviations: &HashSet<String>,
    stemmer: &dyn Stemmer,
    function_words: &HashSet<&str>,
) -> Vec<ProminentWord> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in text::extract_words(text) {
        if !abbreviations.contains(&token) && function_words.contains(token.as_str()) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(word, occurrences)| {
            let stem = if abbreviations.contains(&word) {
                word.clone()
            } else {
                stemmer.stem(&word)
            };
            ProminentWord::new(word, stem, occurrences)
        })
        .collect()
}

/// Collapse candidates sharing a stem into one entry per stem.
///
/// Occurrences sum exactly; the canonical display word is chosen
/// order-independently (a variant spelled like the stem wins, else the
/// lexicographically smallest variant), so collapsing is invariant to input
/// order.
pub fn collapse_on_stem<I>(words: I) -> Vec<ProminentWord>
where
    I: IntoIterator<Item = ProminentWord>,
{
    let mut by_stem: BTreeMap<String, ProminentWord> = BTreeMap::new();

    for word in words {
        match by_stem.entry(word.stem.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(word);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                existing.occurrences += word.occurrences;
                existing.weight = existing.occurrences as f64;
                if existing.word != existing.stem
                    && (word.word == word.stem || word.word < existing.word)
                {
                    existing.word = word.word;
                }
            }
        }
    }

    by_stem.into_values().collect()
}

/// Sort by occurrences descending, then display word ascending.
///
/// The secondary key fixes a total order so equal occurrence counts still
/// produce deterministic output.
pub fn sort_prominent_words(words: &mut [ProminentWord]) {
    words.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.word.cmp(&b.word))
    });
}
