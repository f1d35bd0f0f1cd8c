//! CLI command implementations.

pub mod info;
pub mod score;
pub mod words;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;

use copyrank_core::{MorphologyData, Paper};

/// Document and keyphrase arguments shared by analysis commands.
#[derive(Args, Debug)]
pub struct PaperArgs {
    /// File holding the document body (markdown or plain text).
    pub file: Utf8PathBuf,

    /// Target keyphrase.
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// Document title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Meta description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Synonym keyphrases (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub synonyms: Vec<String>,

    /// Locale tag, e.g. en_US.
    #[arg(long, default_value = "en_US")]
    pub locale: String,
}

impl PaperArgs {
    /// Read the document file and assemble the paper.
    pub fn build_paper(&self) -> anyhow::Result<Paper> {
        let text = std::fs::read_to_string(self.file.as_std_path())
            .with_context(|| format!("failed to read {}", self.file))?;

        Ok(Paper::new(text)
            .with_title(self.title.as_str())
            .with_description(self.description.as_str())
            .with_keyword(self.keyword.as_str())
            .with_synonyms(self.synonyms.clone())
            .with_locale(self.locale.as_str()))
    }
}

/// The morphology table for a language, when one ships with the engine.
pub fn morphology_for(language: &str) -> Option<MorphologyData> {
    (language == "en").then(MorphologyData::english)
}
