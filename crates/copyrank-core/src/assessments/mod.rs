//! The assessment family.
//!
//! Every quality rule is an independent [`Assessment`] behind one contract:
//! an applicability check and a score+message computation. A registry maps
//! identifiers to boxed variants and [`run_assessments`] is the host loop.
//!
//! - [`ranking_intention`] - keyphrase form alignment (ratio-based)
//! - [`text_length`] - body word count tiers
//! - [`meta_description_length`] - meta description length tiers

pub mod meta_description_length;
pub mod ranking_intention;
pub mod text_length;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::marks::{self, Mark};
use crate::paper::Paper;
use crate::researcher::Researcher;
use crate::text;
use crate::translator::Translator;

pub use meta_description_length::MetaDescriptionLengthAssessment;
pub use ranking_intention::RankingIntentionAssessment;
pub use text_length::TextLengthAssessment;

/// All registry identifiers.
pub const ALL_ASSESSMENTS: &[&str] = &["rankingIntention", "textLength", "metaDescriptionLength"];

/// The outcome of one assessment over one paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentResult {
    /// The numeric score. `None` means the assessment could not be evaluated
    /// (required collaborator data was missing).
    pub score: Option<f64>,
    /// Localized, pre-formatted feedback message. May embed markup.
    pub text: String,
    /// Whether highlight spans exist for this result.
    pub has_marks: bool,
    /// The words whose occurrences should be highlighted. Carried in the
    /// result so marks derive from it directly, with no hidden state.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words_to_mark: Vec<String>,
}

impl AssessmentResult {
    /// The "could not be evaluated" outcome: no score, no message, no marks.
    pub fn unscored() -> Self {
        Self::default()
    }

    /// A scored outcome without marks.
    pub fn scored(score: f64, text: String) -> Self {
        Self {
            score: Some(score),
            text,
            ..Self::default()
        }
    }

    /// Derive highlight spans for this result from the paper's sentences.
    pub fn marks(&self, paper: &Paper) -> Vec<Mark> {
        marks::mark_words_in_sentences(&self.words_to_mark, &text::split_sentences(paper.text()))
    }
}

/// One independent scoring rule over a [`Paper`].
pub trait Assessment {
    /// Registry identifier.
    fn identifier(&self) -> &'static str;

    /// Whether this assessment applies to the paper at all.
    ///
    /// Deterministic, side-effect-free, and cheap. Callers must skip
    /// [`Assessment::get_result`] when this returns `false`.
    fn is_applicable(&self, paper: &Paper) -> bool;

    /// Compute the score and message.
    ///
    /// Missing collaborator data yields [`AssessmentResult::unscored`],
    /// never an error.
    fn get_result(
        &self,
        paper: &Paper,
        researcher: &Researcher<'_>,
        translator: &dyn Translator,
    ) -> AssessmentResult;
}

/// The default assessment registry.
pub fn default_assessments() -> Vec<Box<dyn Assessment>> {
    vec![
        Box::new(RankingIntentionAssessment::default()),
        Box::new(TextLengthAssessment::default()),
        Box::new(MetaDescriptionLengthAssessment::default()),
    ]
}

/// Run every applicable assessment and collect the results.
#[tracing::instrument(skip_all, fields(assessments = assessments.len()))]
pub fn run_assessments(
    paper: &Paper,
    researcher: &Researcher<'_>,
    translator: &dyn Translator,
    assessments: &[Box<dyn Assessment>],
) -> Vec<AssessmentResult> {
    assessments
        .iter()
        .filter(|assessment| assessment.is_applicable(paper))
        .map(|assessment| {
            tracing::debug!(identifier = assessment.identifier(), "running assessment");
            assessment.get_result(paper, researcher, translator)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::EnglishCatalog;

    #[test]
    fn registry_matches_identifier_list() {
        let identifiers: Vec<&str> = default_assessments()
            .iter()
            .map(|a| a.identifier())
            .collect();
        assert_eq!(identifiers, ALL_ASSESSMENTS);
    }

    #[test]
    fn inapplicable_assessments_are_skipped() {
        // No keyword, so ranking intention is skipped; short text trims the
        // rest down to text length only.
        let paper = Paper::new("A handful of words.");
        let researcher = Researcher::new(&paper);
        let results = run_assessments(
            &paper,
            &researcher,
            &EnglishCatalog,
            &default_assessments(),
        );
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn unscored_result_is_empty() {
        let result = AssessmentResult::unscored();
        assert_eq!(result.score, None);
        assert_eq!(result.text, "");
        assert!(!result.has_marks);
    }
}
