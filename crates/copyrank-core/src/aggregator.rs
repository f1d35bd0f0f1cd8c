//! Score aggregation and rating.
//!
//! Turns an unordered pile of assessment results into a stable presentation
//! order plus one overall rating, and hands the raw overall score to an
//! external sink.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::assessments::AssessmentResult;
use crate::translator::Translator;

/// A rating bucket derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Score of 4 or lower.
    Bad,
    /// Score above 4, up to 7.
    Ok,
    /// Score above 7.
    Good,
    /// No score to rate.
    Na,
}

impl Rating {
    /// Bucket a per-result score.
    ///
    /// This is the single bucketing function: per-result ratings and the
    /// overall rating both go through it, so the thresholds cannot drift.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::Na,
            Some(s) if s <= 4.0 => Self::Bad,
            Some(s) if s <= 7.0 => Self::Ok,
            Some(_) => Self::Good,
        }
    }

    /// Bucket an overall score: round to the nearest integer, divide by
    /// ten, then apply the shared bucketing.
    pub fn for_overall(overall_score: f64) -> Self {
        Self::from_score(Some(overall_score.round() / 10.0))
    }

    /// The rating as its wire/CSS token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bad => "bad",
            Self::Ok => "ok",
            Self::Good => "good",
            Self::Na => "na",
        }
    }

    /// Human-readable description of this rating.
    pub fn description(self, translator: &dyn Translator) -> String {
        let key = match self {
            Self::Bad => "score-rating-bad",
            Self::Ok => "score-rating-ok",
            Self::Good => "score-rating-good",
            Self::Na => "score-rating-na",
        };
        translator.message(key, &[])
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives the raw overall score once per aggregation pass.
pub trait ScoreSink {
    /// Consume the overall score. Fire-and-forget from the aggregator's
    /// point of view.
    fn notify(&mut self, overall_score: f64);
}

/// A sink that discards the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn notify(&mut self, _overall_score: f64) {}
}

/// An assessment result paired with its rating bucket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RatedResult {
    /// The underlying result.
    #[serde(flatten)]
    pub result: AssessmentResult,
    /// The rating bucket for the result's score.
    pub rating: Rating,
}

/// The outcome of one aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Aggregation {
    /// Results in presentation order: unscored first (original relative
    /// order), then scored ascending.
    pub results: Vec<RatedResult>,
    /// The raw overall score, as handed to the sink.
    pub overall_score: f64,
    /// The overall rating bucket.
    pub overall_rating: Rating,
}

/// Mean of the scored results, scaled to the 0–100 overall range.
///
/// How the overall score is combined is the host's business; this is the
/// combination the CLI uses.
pub fn mean_overall_score(results: &[AssessmentResult]) -> f64 {
    let scores: Vec<f64> = results.iter().filter_map(|r| r.score).collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64 * 10.0
}

/// Aggregate assessment results into presentation order and an overall
/// rating, notifying `sink` of the raw overall score exactly once.
///
/// An empty `keyword` means no meaningful analysis occurred, so the overall
/// rating is forced to [`Rating::Na`]; the sink still receives the raw
/// score.
#[tracing::instrument(skip_all, fields(results = results.len(), overall_score))]
pub fn aggregate(
    results: Vec<AssessmentResult>,
    overall_score: f64,
    keyword: &str,
    sink: &mut dyn ScoreSink,
) -> Aggregation {
    let (unsortable, mut sortable): (Vec<AssessmentResult>, Vec<AssessmentResult>) =
        results.into_iter().partition(|r| r.score.is_none());
    sortable.sort_by(|a, b| {
        // Partition guarantees a score on both sides.
        let a = a.score.unwrap_or_default();
        let b = b.score.unwrap_or_default();
        a.total_cmp(&b)
    });

    let results = unsortable
        .into_iter()
        .chain(sortable)
        .map(|result| RatedResult {
            rating: Rating::from_score(result.score),
            result,
        })
        .collect();

    let overall_rating = if keyword.is_empty() {
        Rating::Na
    } else {
        Rating::for_overall(overall_score)
    };

    sink.notify(overall_score);

    Aggregation {
        results,
        overall_score,
        overall_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        notified: Vec<f64>,
    }

    impl ScoreSink for RecordingSink {
        fn notify(&mut self, overall_score: f64) {
            self.notified.push(overall_score);
        }
    }

    fn result(score: Option<f64>, text: &str) -> AssessmentResult {
        AssessmentResult {
            score,
            text: text.to_string(),
            ..AssessmentResult::default()
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Rating::from_score(Some(4.0)), Rating::Bad);
        assert_eq!(Rating::from_score(Some(4.1)), Rating::Ok);
        assert_eq!(Rating::from_score(Some(7.0)), Rating::Ok);
        assert_eq!(Rating::from_score(Some(7.1)), Rating::Good);
        assert_eq!(Rating::from_score(None), Rating::Na);
    }

    #[test]
    fn overall_rating_rounds_then_divides() {
        assert_eq!(Rating::for_overall(35.0), Rating::Bad);
        assert_eq!(Rating::for_overall(40.0), Rating::Bad);
        assert_eq!(Rating::for_overall(44.6), Rating::Ok);
        assert_eq!(Rating::for_overall(65.0), Rating::Ok);
        assert_eq!(Rating::for_overall(70.4), Rating::Ok);
        assert_eq!(Rating::for_overall(70.5), Rating::Good);
        assert_eq!(Rating::for_overall(90.0), Rating::Good);
    }

    #[test]
    fn unscored_results_come_first_in_input_order() {
        let input = vec![
            result(None, "first unscored"),
            result(Some(9.0), "nine"),
            result(None, "second unscored"),
            result(Some(3.0), "three"),
        ];
        let aggregation = aggregate(input, 60.0, "keyword", &mut NullSink);
        let texts: Vec<&str> = aggregation
            .results
            .iter()
            .map(|r| r.result.text.as_str())
            .collect();
        assert_eq!(texts, ["first unscored", "second unscored", "three", "nine"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let input = vec![
            result(Some(6.0), "first six"),
            result(Some(6.0), "second six"),
            result(Some(3.0), "three"),
        ];
        let aggregation = aggregate(input, 50.0, "keyword", &mut NullSink);
        let texts: Vec<&str> = aggregation
            .results
            .iter()
            .map(|r| r.result.text.as_str())
            .collect();
        assert_eq!(texts, ["three", "first six", "second six"]);
    }

    #[test]
    fn per_result_ratings_use_shared_buckets() {
        let input = vec![result(Some(3.0), "bad"), result(Some(9.0), "good")];
        let aggregation = aggregate(input, 60.0, "keyword", &mut NullSink);
        assert_eq!(aggregation.results[0].rating, Rating::Bad);
        assert_eq!(aggregation.results[1].rating, Rating::Good);
    }

    #[test]
    fn empty_keyword_forces_na_but_still_notifies() {
        let mut sink = RecordingSink::default();
        let aggregation = aggregate(vec![result(Some(9.0), "x")], 90.0, "", &mut sink);
        assert_eq!(aggregation.overall_rating, Rating::Na);
        assert_eq!(sink.notified, vec![90.0]);
    }

    #[test]
    fn sink_is_notified_exactly_once_with_the_raw_score() {
        let mut sink = RecordingSink::default();
        aggregate(Vec::new(), 73.4, "keyword", &mut sink);
        assert_eq!(sink.notified, vec![73.4]);
    }

    #[test]
    fn mean_overall_score_ignores_unscored() {
        let results = vec![
            result(Some(9.0), "a"),
            result(None, "b"),
            result(Some(3.0), "c"),
        ];
        assert!((mean_overall_score(&results) - 60.0).abs() < f64::EPSILON);
        assert_eq!(mean_overall_score(&[]), 0.0);
    }
}
