//! Score command — run the assessment pipeline and aggregate.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use copyrank_core::aggregator::{self, Rating, ScoreSink};
use copyrank_core::assessments::{
    self, Assessment, MetaDescriptionLengthAssessment, RankingIntentionAssessment,
    TextLengthAssessment,
};
use copyrank_core::config::Config;
use copyrank_core::{AnalysisError, EnglishCatalog, Researcher};

use super::{PaperArgs, morphology_for};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Document and keyphrase inputs.
    #[command(flatten)]
    pub paper: PaperArgs,

    /// Print highlight spans for results that have them.
    #[arg(long)]
    pub marks: bool,
}

/// Logs the overall score; stands in for an editor's persistence layer.
struct LogSink;

impl ScoreSink for LogSink {
    fn notify(&mut self, overall_score: f64) {
        debug!(overall_score, "overall score recorded");
    }
}

/// Run every applicable assessment over the document and aggregate.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.paper.file))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let paper = args.paper.build_paper()?;
    if !paper.has_text() {
        return Err(AnalysisError::EmptyInput.into());
    }
    let morphology = morphology_for(paper.language());
    let mut researcher = Researcher::new(&paper);
    if let Some(ref morphology) = morphology {
        researcher = researcher.with_morphology(morphology);
    }

    let registry: Vec<Box<dyn Assessment>> = vec![
        Box::new(RankingIntentionAssessment::new(
            config.ranking_intention.clone(),
        )),
        Box::new(TextLengthAssessment::new(config.text_length.clone())),
        Box::new(MetaDescriptionLengthAssessment::new(
            config.meta_description.clone(),
        )),
    ];

    let results = assessments::run_assessments(&paper, &researcher, &EnglishCatalog, &registry);
    let overall = aggregator::mean_overall_score(&results);
    let aggregation = aggregator::aggregate(results, overall, paper.keyword(), &mut LogSink);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&aggregation)?);
        return Ok(());
    }

    println!("{}", args.paper.file.bold());
    for rated in &aggregation.results {
        if rated.result.text.is_empty() {
            continue;
        }
        println!("  {} {}", colorize_rating(rated.rating), rated.result.text);

        if args.marks && rated.result.has_marks {
            for mark in rated.result.marks(&paper) {
                println!("      {}", mark.marked.dimmed());
            }
        }
    }

    println!(
        "\n  {} {} ({:.0})",
        "Overall:".cyan(),
        colorize_rating(aggregation.overall_rating),
        aggregation.overall_score,
    );

    Ok(())
}

fn colorize_rating(rating: Rating) -> String {
    match rating {
        Rating::Good => format!("[{rating}]").green().to_string(),
        Rating::Ok => format!("[{rating}]").yellow().to_string(),
        Rating::Bad => format!("[{rating}]").red().to_string(),
        Rating::Na => format!("[{rating}]").dimmed().to_string(),
    }
}
