//! Derived measurements over a paper, computed on demand and cached.
//!
//! A [`Researcher`] lives for one analysis pass. Each named research is a
//! method backed by a `OnceLock`: written once on first use, read many
//! times by whichever assessments need it. Assessments share the researcher
//! immutably, so the host may evaluate them in parallel.

use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::morphology::MorphologyData;
use crate::paper::Paper;
use crate::text;
use crate::word_lists;

/// One keyphrase form paired with its morphological counterpart, and how
/// often each occurs in the body text.
///
/// Counts are non-negative by construction; a pair with both counts zero
/// means the form never occurs in the text at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OriginalModifiedPair {
    /// The form as written in the keyphrase.
    pub original: String,
    /// Occurrences of the original form in the body text.
    pub original_count: usize,
    /// The morphological counterpart of the original form.
    pub modified: String,
    /// Occurrences of the counterpart form in the body text.
    pub modified_count: usize,
}

/// Named-research cache over one [`Paper`].
pub struct Researcher<'a> {
    paper: &'a Paper,
    morphology: Option<&'a MorphologyData>,
    singular_and_plural: OnceLock<Vec<OriginalModifiedPair>>,
}

impl<'a> Researcher<'a> {
    /// Create a researcher with no morphology data registered.
    pub const fn new(paper: &'a Paper) -> Self {
        Self {
            paper,
            morphology: None,
            singular_and_plural: OnceLock::new(),
        }
    }

    /// Register the morphology table for the paper's language.
    #[must_use]
    pub const fn with_morphology(mut self, data: &'a MorphologyData) -> Self {
        self.morphology = Some(data);
        self
    }

    /// The paper under analysis.
    pub const fn paper(&self) -> &Paper {
        self.paper
    }

    /// The morphology table, when one is registered for this language.
    pub const fn morphology(&self) -> Option<&'a MorphologyData> {
        self.morphology
    }

    /// Keyphrase forms paired with their morphological counterparts and
    /// occurrence counts.
    ///
    /// One pair per distinct content token across the keyword and every
    /// synonym keyphrase; function words carry no form signal and are
    /// skipped. Empty when no morphology data is registered.
    pub fn singular_and_plural(&self) -> &[OriginalModifiedPair] {
        self.singular_and_plural
            .get_or_init(|| self.compute_singular_and_plural())
    }

    fn compute_singular_and_plural(&self) -> Vec<OriginalModifiedPair> {
        let Some(morphology) = self.morphology else {
            return Vec::new();
        };

        let mut tokens: Vec<String> = Vec::new();
        let phrases =
            std::iter::once(self.paper.keyword()).chain(self.paper.synonyms().iter().map(String::as_str));
        for phrase in phrases {
            for token in text::extract_words(phrase) {
                if word_lists::is_function_word(&token) || tokens.contains(&token) {
                    continue;
                }
                tokens.push(token);
            }
        }

        let body = self.paper.text();
        tokens
            .into_iter()
            .filter_map(|original| {
                let modified = morphology.lookup(&original)?;
                let original_count = text::count_word_occurrences(body, &original);
                let modified_count = text::count_word_occurrences(body, &modified);
                Some(OriginalModifiedPair {
                    original,
                    original_count,
                    modified,
                    modified_count,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_morphology_means_no_pairs() {
        let paper = Paper::new("Plant pots everywhere.").with_keyword("plant pots");
        let researcher = Researcher::new(&paper);
        assert!(researcher.singular_and_plural().is_empty());
    }

    #[test]
    fn pairs_cover_keyword_and_synonym_tokens() {
        let paper = Paper::new("There are many pots for plant that you can choose.")
            .with_keyword("plant pots")
            .with_synonyms(["flower pots"]);
        let morphology = MorphologyData::english();
        let researcher = Researcher::new(&paper).with_morphology(&morphology);

        let pairs = researcher.singular_and_plural();
        let originals: Vec<&str> = pairs.iter().map(|p| p.original.as_str()).collect();
        assert_eq!(originals, ["plant", "pots", "flower"]);

        let plant = &pairs[0];
        assert_eq!(plant.modified, "plants");
        assert_eq!(plant.original_count, 1);
        assert_eq!(plant.modified_count, 0);

        let pots = &pairs[1];
        assert_eq!(pots.modified, "pot");
        assert_eq!(pots.original_count, 1);
        assert_eq!(pots.modified_count, 0);
    }

    #[test]
    fn function_words_are_skipped() {
        let paper = Paper::new("words").with_keyword("the pots");
        let morphology = MorphologyData::english();
        let researcher = Researcher::new(&paper).with_morphology(&morphology);
        let pairs = researcher.singular_and_plural();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].original, "pots");
    }

    #[test]
    fn research_is_computed_once() {
        let paper = Paper::new("pots").with_keyword("pots");
        let morphology = MorphologyData::english();
        let researcher = Researcher::new(&paper).with_morphology(&morphology);
        let first = researcher.singular_and_plural().as_ptr();
        let second = researcher.singular_and_plural().as_ptr();
        assert_eq!(first, second);
    }
}
