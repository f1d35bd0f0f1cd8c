//! Keyphrase form alignment ("ranking intention") assessment.
//!
//! Compares how often each keyphrase form occurs in the text against its
//! morphological counterpart. A keyphrase written in the singular signals a
//! different search intention than its plural; a text that mostly uses the
//! counterpart forms works against the chosen keyphrase.

use serde::{Deserialize, Serialize};

use crate::paper::Paper;
use crate::researcher::{OriginalModifiedPair, Researcher};
use crate::translator::{Translator, anchor_opening_tag};

use super::{Assessment, AssessmentResult};

/// Tier scores for the ranking-intention assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingIntentionScores {
    /// The text aligns with the keyphrase's ranking intention.
    pub good: f64,
    /// No particular ranking intention is reflected.
    pub okay: f64,
    /// The text works against the keyphrase's ranking intention.
    pub bad: f64,
    /// The keyphrase never occurs, so no intention can be determined.
    pub consideration: f64,
}

impl Default for RankingIntentionScores {
    fn default() -> Self {
        Self {
            good: 9.0,
            okay: 6.0,
            bad: 3.0,
            consideration: 0.0,
        }
    }
}

/// Configuration for [`RankingIntentionAssessment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingIntentionConfig {
    /// Tier scores.
    pub scores: RankingIntentionScores,
    /// KB article link embedded in the message label.
    pub url_title: String,
    /// Call-to-action link embedded in the bad-tier message.
    pub url_call_to_action: String,
}

impl Default for RankingIntentionConfig {
    fn default() -> Self {
        Self {
            scores: RankingIntentionScores::default(),
            url_title: "https://copyrank.dev/ranking-intention".to_string(),
            url_call_to_action: "https://copyrank.dev/ranking-intention-fix".to_string(),
        }
    }
}

/// The ranking-intention assessment.
#[derive(Debug, Clone, Default)]
pub struct RankingIntentionAssessment {
    config: RankingIntentionConfig,
}

impl RankingIntentionAssessment {
    /// Create the assessment with explicit configuration.
    pub const fn new(config: RankingIntentionConfig) -> Self {
        Self { config }
    }

    fn calculate(
        &self,
        pairs: &[OriginalModifiedPair],
        translator: &dyn Translator,
    ) -> (f64, String) {
        let anchor = anchor_opening_tag(&self.config.url_title);

        let Some(percentage) = determine_percentage(pairs) else {
            return (
                self.config.scores.consideration,
                translator.message("ranking-intention-consideration", &[&anchor, "</a>"]),
            );
        };

        if percentage >= 60.0 {
            (
                self.config.scores.good,
                translator.message("ranking-intention-good", &[&anchor, "</a>"]),
            )
        } else if (40.0..=59.0).contains(&percentage) {
            (
                self.config.scores.okay,
                translator.message("ranking-intention-ok", &[&anchor, "</a>"]),
            )
        } else {
            let cta = anchor_opening_tag(&self.config.url_call_to_action);
            (
                self.config.scores.bad,
                translator.message("ranking-intention-bad", &[&anchor, "</a>", &cta]),
            )
        }
    }
}

/// Alignment percentage for a set of form pairs.
///
/// Each pair with at least one occurrence contributes
/// `100 * original / (original + modified)`, rounded to two decimals; the
/// worst-aligned form dominates, so the minimum wins. `None` when no form
/// occurs at all; the caller turns that into the consideration tier before
/// any ratio math.
fn determine_percentage(pairs: &[OriginalModifiedPair]) -> Option<f64> {
    pairs
        .iter()
        .filter(|pair| pair.original_count + pair.modified_count > 0)
        .map(|pair| {
            let total = (pair.original_count + pair.modified_count) as f64;
            round2(pair.original_count as f64 * 100.0 / total)
        })
        .reduce(f64::min)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Assessment for RankingIntentionAssessment {
    fn identifier(&self) -> &'static str {
        "rankingIntention"
    }

    /// Applies to English papers with a keyphrase and at least 100 words.
    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text()
            && paper.has_keyword()
            && paper.word_count() >= 100
            && paper.language() == "en"
    }

    fn get_result(
        &self,
        _paper: &Paper,
        researcher: &Researcher<'_>,
        translator: &dyn Translator,
    ) -> AssessmentResult {
        // No morphology table for this language: nothing to compare against.
        if researcher.morphology().is_none() {
            return AssessmentResult::unscored();
        }

        let pairs = researcher.singular_and_plural();
        let (score, text) = self.calculate(pairs, translator);

        let words_to_mark: Vec<String> = pairs
            .iter()
            .filter(|pair| pair.modified_count > 0)
            .map(|pair| pair.modified.clone())
            .collect();
        let has_marks = determine_percentage(pairs).is_some_and(|p| p < 100.0);

        AssessmentResult {
            score: Some(score),
            text,
            has_marks,
            words_to_mark,
        }
    }
}
