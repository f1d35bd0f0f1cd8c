//! Body text length assessment.
//!
//! Thin content rarely ranks: this assessment scores the body word count
//! against a fixed tier table.

use serde::{Deserialize, Serialize};

use crate::paper::Paper;
use crate::researcher::Researcher;
use crate::translator::{Translator, anchor_opening_tag};

use super::{Assessment, AssessmentResult};

/// Tier scores for the text-length assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLengthScores {
    /// At or above the recommended minimum.
    pub good: f64,
    /// Slightly below the recommended minimum.
    pub slightly_short: f64,
    /// Well below the recommended minimum.
    pub short: f64,
    /// Far below the recommended minimum.
    pub far_too_short: f64,
}

impl Default for TextLengthScores {
    fn default() -> Self {
        Self {
            good: 9.0,
            slightly_short: 7.0,
            short: 3.0,
            far_too_short: -10.0,
        }
    }
}

/// Configuration for [`TextLengthAssessment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLengthConfig {
    /// Tier scores.
    pub scores: TextLengthScores,
    /// Recommended minimum word count.
    pub recommended_minimum: usize,
    /// Word counts at or above this but below the minimum are only
    /// slightly short.
    pub slightly_short_from: usize,
    /// Word counts below this are far too short.
    pub far_too_short_below: usize,
    /// KB article link embedded in the message label.
    pub url_title: String,
    /// Call-to-action link embedded in sub-minimum messages.
    pub url_call_to_action: String,
}

impl Default for TextLengthConfig {
    fn default() -> Self {
        Self {
            scores: TextLengthScores::default(),
            recommended_minimum: 300,
            slightly_short_from: 250,
            far_too_short_below: 100,
            url_title: "https://copyrank.dev/text-length".to_string(),
            url_call_to_action: "https://copyrank.dev/text-length-fix".to_string(),
        }
    }
}

/// The text-length assessment.
#[derive(Debug, Clone, Default)]
pub struct TextLengthAssessment {
    config: TextLengthConfig,
}

impl TextLengthAssessment {
    /// Create the assessment with explicit configuration.
    pub const fn new(config: TextLengthConfig) -> Self {
        Self { config }
    }
}

impl Assessment for TextLengthAssessment {
    fn identifier(&self) -> &'static str {
        "textLength"
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text()
    }

    fn get_result(
        &self,
        paper: &Paper,
        _researcher: &Researcher<'_>,
        translator: &dyn Translator,
    ) -> AssessmentResult {
        let words = paper.word_count();
        let anchor = anchor_opening_tag(&self.config.url_title);
        let cta = anchor_opening_tag(&self.config.url_call_to_action);
        let words_arg = words.to_string();
        let minimum_arg = self.config.recommended_minimum.to_string();

        let (score, key) = if words >= self.config.recommended_minimum {
            (self.config.scores.good, "text-length-good")
        } else if words >= self.config.slightly_short_from {
            (self.config.scores.slightly_short, "text-length-slightly-short")
        } else if words >= self.config.far_too_short_below {
            (self.config.scores.short, "text-length-short")
        } else {
            (self.config.scores.far_too_short, "text-length-far-too-short")
        };

        let text =
            translator.message(key, &[&anchor, "</a>", &words_arg, &minimum_arg, &cta]);
        AssessmentResult::scored(score, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::EnglishCatalog;

    fn score_for(words: usize) -> f64 {
        let paper = Paper::new("word ".repeat(words));
        let researcher = Researcher::new(&paper);
        TextLengthAssessment::default()
            .get_result(&paper, &researcher, &EnglishCatalog)
            .score
            .expect("text length always scores")
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(score_for(300), 9.0);
        assert_eq!(score_for(299), 7.0);
        assert_eq!(score_for(250), 7.0);
        assert_eq!(score_for(249), 3.0);
        assert_eq!(score_for(100), 3.0);
        assert_eq!(score_for(99), -10.0);
        assert_eq!(score_for(1), -10.0);
    }

    #[test]
    fn message_reports_the_count() {
        let paper = Paper::new("word ".repeat(120));
        let researcher = Researcher::new(&paper);
        let result = TextLengthAssessment::default().get_result(
            &paper,
            &researcher,
            &EnglishCatalog,
        );
        assert!(result.text.contains("120 words"));
        assert!(result.text.contains("300 words"));
    }

    #[test]
    fn not_applicable_without_text() {
        assert!(!TextLengthAssessment::default().is_applicable(&Paper::new("")));
    }
}
