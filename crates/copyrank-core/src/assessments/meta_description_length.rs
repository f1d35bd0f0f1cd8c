//! Meta-description length assessment.
//!
//! Search engines truncate long descriptions and pad short ones with page
//! content; both waste the snippet. Scores the character count against the
//! visible-snippet range.

use serde::{Deserialize, Serialize};

use crate::paper::Paper;
use crate::researcher::Researcher;
use crate::translator::{Translator, anchor_opening_tag};

use super::{Assessment, AssessmentResult};

/// Tier scores for the meta-description-length assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaDescriptionScores {
    /// Within the visible-snippet range.
    pub good: f64,
    /// Too short to use the available space.
    pub too_short: f64,
    /// Long enough to get truncated.
    pub too_long: f64,
}

impl Default for MetaDescriptionScores {
    fn default() -> Self {
        Self {
            good: 9.0,
            too_short: 6.0,
            too_long: 6.0,
        }
    }
}

/// Configuration for [`MetaDescriptionLengthAssessment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaDescriptionConfig {
    /// Tier scores.
    pub scores: MetaDescriptionScores,
    /// Minimum recommended length in characters.
    pub minimum_length: usize,
    /// Maximum visible length in characters.
    pub maximum_length: usize,
    /// KB article link embedded in the message label.
    pub url_title: String,
    /// Call-to-action link embedded in out-of-range messages.
    pub url_call_to_action: String,
}

impl Default for MetaDescriptionConfig {
    fn default() -> Self {
        Self {
            scores: MetaDescriptionScores::default(),
            minimum_length: 120,
            maximum_length: 156,
            url_title: "https://copyrank.dev/meta-description".to_string(),
            url_call_to_action: "https://copyrank.dev/meta-description-fix".to_string(),
        }
    }
}

/// The meta-description-length assessment.
#[derive(Debug, Clone, Default)]
pub struct MetaDescriptionLengthAssessment {
    config: MetaDescriptionConfig,
}

impl MetaDescriptionLengthAssessment {
    /// Create the assessment with explicit configuration.
    pub const fn new(config: MetaDescriptionConfig) -> Self {
        Self { config }
    }
}

impl Assessment for MetaDescriptionLengthAssessment {
    fn identifier(&self) -> &'static str {
        "metaDescriptionLength"
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_description()
    }

    fn get_result(
        &self,
        paper: &Paper,
        _researcher: &Researcher<'_>,
        translator: &dyn Translator,
    ) -> AssessmentResult {
        let length = paper.description().chars().count();
        let anchor = anchor_opening_tag(&self.config.url_title);
        let cta = anchor_opening_tag(&self.config.url_call_to_action);
        let minimum_arg = self.config.minimum_length.to_string();
        let maximum_arg = self.config.maximum_length.to_string();

        let (score, key) = if length < self.config.minimum_length {
            (self.config.scores.too_short, "meta-description-short")
        } else if length <= self.config.maximum_length {
            (self.config.scores.good, "meta-description-good")
        } else {
            (self.config.scores.too_long, "meta-description-long")
        };

        let text =
            translator.message(key, &[&anchor, "</a>", &minimum_arg, &maximum_arg, &cta]);
        AssessmentResult::scored(score, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::EnglishCatalog;

    fn score_for(length: usize) -> f64 {
        let paper = Paper::new("body").with_description("d".repeat(length));
        let researcher = Researcher::new(&paper);
        MetaDescriptionLengthAssessment::default()
            .get_result(&paper, &researcher, &EnglishCatalog)
            .score
            .expect("meta description length always scores")
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(score_for(119), 6.0);
        assert_eq!(score_for(120), 9.0);
        assert_eq!(score_for(156), 9.0);
        assert_eq!(score_for(157), 6.0);
    }

    #[test]
    fn not_applicable_without_description() {
        let assessment = MetaDescriptionLengthAssessment::default();
        assert!(!assessment.is_applicable(&Paper::new("body text")));
        assert!(assessment.is_applicable(&Paper::new("body").with_description("a summary")));
    }
}
