//! The document under analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// An immutable document plus its keyphrase and locale metadata.
///
/// Owned by the caller and read-only to the engine: one `Paper` is built per
/// analysis pass and shared by every assessment and the prominent-word
/// extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Paper {
    /// The raw body text (markdown or plain text).
    text: String,
    /// The document title.
    title: String,
    /// The meta description.
    description: String,
    /// The target keyphrase.
    keyword: String,
    /// Synonym keyphrases for the target keyphrase.
    synonyms: Vec<String>,
    /// Locale tag, e.g. `en_US`.
    locale: String,
}

impl Paper {
    /// Create a paper from body text with an `en_US` locale and no metadata.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            locale: "en_US".to_string(),
            ..Self::default()
        }
    }

    /// Set the document title.
    #[must_use]
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Set the meta description.
    #[must_use]
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Set the target keyphrase.
    #[must_use]
    pub fn with_keyword<S: Into<String>>(mut self, keyword: S) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Set the synonym keyphrases.
    #[must_use]
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the locale tag (e.g. `en_US`).
    #[must_use]
    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = locale.into();
        self
    }

    /// The raw body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The meta description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The target keyphrase.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The synonym keyphrases.
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// The locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The language part of the locale (`en` from `en_US`).
    pub fn language(&self) -> &str {
        self.locale.split('_').next().unwrap_or(&self.locale)
    }

    /// Whether the paper has any body text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Whether a target keyphrase is set.
    pub fn has_keyword(&self) -> bool {
        !self.keyword.trim().is_empty()
    }

    /// Whether a title is set.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Whether a meta description is set.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Word count of the body text.
    pub fn word_count(&self) -> usize {
        text::count_words(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_round_trip() {
        let paper = Paper::new("Some body text.")
            .with_title("Title")
            .with_description("Desc")
            .with_keyword("plant pots")
            .with_synonyms(["flower pots"])
            .with_locale("en_GB");

        assert!(paper.has_text());
        assert!(paper.has_keyword());
        assert!(paper.has_title());
        assert!(paper.has_description());
        assert_eq!(paper.language(), "en");
        assert_eq!(paper.synonyms(), ["flower pots".to_string()]);
    }

    #[test]
    fn empty_paper_has_nothing() {
        let paper = Paper::new("");
        assert!(!paper.has_text());
        assert!(!paper.has_keyword());
        assert_eq!(paper.word_count(), 0);
    }

    #[test]
    fn language_from_locale() {
        assert_eq!(Paper::new("x").with_locale("id_ID").language(), "id");
        assert_eq!(Paper::new("x").with_locale("en").language(), "en");
    }
}
