//! Core library for copyrank.
//!
//! A content-scoring engine: evaluates one document ([`Paper`]) against a
//! target keyphrase, producing weighted assessment results, an overall
//! rating, and a ranked list of prominent words for link suggestions.
//!
//! # Modules
//!
//! - [`assessments`] - The scoring-rule family and its shared contract
//! - [`prominent_words`] - Salient-word extraction
//! - [`aggregator`] - Result ordering, rating buckets, overall rating
//! - [`researcher`] - On-demand derived measurements with per-pass caching
//! - [`config`] - Configuration loading and management
//!
//! # Quick Start
//!
//! ```
//! use copyrank_core::{
//!     aggregator, assessments, EnglishCatalog, MorphologyData, Paper, Researcher,
//! };
//!
//! let paper = Paper::new("Pots for every plant. ".repeat(60))
//!     .with_title("Plant pots")
//!     .with_keyword("plant pots");
//! let morphology = MorphologyData::english();
//! let researcher = Researcher::new(&paper).with_morphology(&morphology);
//!
//! let results = assessments::run_assessments(
//!     &paper,
//!     &researcher,
//!     &EnglishCatalog,
//!     &assessments::default_assessments(),
//! );
//! let overall = aggregator::mean_overall_score(&results);
//! let aggregation = aggregator::aggregate(
//!     results,
//!     overall,
//!     paper.keyword(),
//!     &mut aggregator::NullSink,
//! );
//! println!("overall: {}", aggregation.overall_rating);
//! ```
#![deny(unsafe_code)]

pub mod aggregator;
pub mod assessments;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod marks;
pub mod morphology;
pub mod paper;
pub mod prominent_words;
pub mod researcher;
pub mod stemmer;
pub mod text;
pub mod translator;
pub mod word_lists;

pub use aggregator::{Aggregation, NullSink, RatedResult, Rating, ScoreSink};
pub use assessments::{Assessment, AssessmentResult};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use marks::Mark;
pub use morphology::MorphologyData;
pub use paper::Paper;
pub use prominent_words::{ProminentWord, ProminentWordsResult};
pub use researcher::{OriginalModifiedPair, Researcher};
pub use stemmer::{Stemmer, SuffixStemmer};
pub use translator::{EnglishCatalog, Translator};
