//! Words command — prominent-word extraction.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use copyrank_core::prominent_words;
use copyrank_core::word_lists::FUNCTION_WORDS;
use copyrank_core::{AnalysisError, SuffixStemmer};

use super::{PaperArgs, morphology_for};

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Document and keyphrase inputs.
    #[command(flatten)]
    pub paper: PaperArgs,

    /// Show at most this many words.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

/// Extract and print the document's prominent words.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.paper.file))]
pub fn cmd_words(args: WordsArgs, global_json: bool) -> anyhow::Result<()> {
    let paper = args.paper.build_paper()?;
    if !paper.has_text() {
        return Err(AnalysisError::EmptyInput.into());
    }
    let morphology = morphology_for(paper.language());

    let result = prominent_words::extract(
        &paper,
        &SuffixStemmer,
        &FUNCTION_WORDS,
        morphology.as_ref(),
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", args.paper.file.bold());

    if result.prominent_words.is_empty() {
        println!("  No prominent words (the text may be under 100 words).");
        return Ok(());
    }

    for word in result.prominent_words.iter().take(args.limit) {
        println!("  {:>5}  {}", word.occurrences().cyan(), word.word());
    }

    let remaining = result.prominent_words.len().saturating_sub(args.limit);
    if remaining > 0 {
        println!("  ... and {remaining} more");
    }

    Ok(())
}
