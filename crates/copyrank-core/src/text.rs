//! Text measurement primitives.
//!
//! Word extraction, word counting, abbreviation-aware sentence splitting,
//! and markdown subheading handling for the analysis pipelines.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Regex for decimal numbers (3.14, 2.5, etc.).
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+$").expect("valid regex"));

/// Heading levels treated as top-level subheadings.
///
/// H1 is the document title's territory; H4 and deeper are too fine-grained
/// to count as attribute signal.
const SUBHEADING_LEVELS: [HeadingLevel; 2] = [HeadingLevel::H2, HeadingLevel::H3];

/// Extract words from text, splitting on whitespace and stripping punctuation.
///
/// Words are lowercased. Internal apostrophes and hyphens are kept.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Count words by whitespace splitting with punctuation-only tokens ignored.
pub fn count_words(text: &str) -> usize {
    extract_words(text).len()
}

/// Count whole-word, case-insensitive occurrences of `word` in `text`.
pub fn count_word_occurrences(text: &str, word: &str) -> usize {
    let target = word.to_lowercase();
    extract_words(text).iter().filter(|w| **w == target).count()
}

/// Split text into sentences with abbreviation and decimal awareness.
///
/// A `.`, `!`, or `?` ends a sentence unless the preceding word is a known
/// abbreviation, a single initial, or part of a decimal number, or the
/// following text starts lowercase.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let min_length = 3;
    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        if matches!(ch, '.' | '!' | '?') && is_sentence_boundary(&chars, i, &current) {
            let sentence = current.trim().to_string();
            if sentence.len() >= min_length {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    let sentence = current.trim().to_string();
    if sentence.len() >= min_length {
        sentences.push(sentence);
    }

    sentences
}

fn is_sentence_boundary(chars: &[char], pos: usize, current: &str) -> bool {
    if pos == chars.len() - 1 {
        return true;
    }

    if chars[pos] == '.' {
        let before = word_before(chars, pos);

        if is_abbreviation(&before) || is_single_initial(&before) {
            return false;
        }
        if DECIMAL_PATTERN.is_match(current.trim_end_matches('.')) {
            // Mid-number period already consumed into `current`
            return false;
        }
        if current.ends_with("...") {
            return false;
        }
        // Digit directly after the period = decimal number
        if chars.get(pos + 1).is_some_and(char::is_ascii_digit) {
            return false;
        }
    }

    // Peek at the first non-whitespace character after the terminator
    match chars[pos + 1..].iter().find(|c| !c.is_whitespace()) {
        Some(next) if next.is_lowercase() => false,
        Some(_) => true,
        // Trailing whitespace only
        None => true,
    }
}

fn word_before(chars: &[char], pos: usize) -> String {
    let mut end = pos;
    while end > 0 && (chars[end - 1] == '.' || chars[end - 1].is_whitespace()) {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '.') {
        start -= 1;
    }
    chars[start..end].iter().collect()
}

fn is_single_initial(word: &str) -> bool {
    word.len() == 1 && word.chars().next().is_some_and(char::is_uppercase)
}

/// Extract top-level subheading texts (markdown H2/H3) from a document.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn get_subheadings(text: &str) -> Vec<String> {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    let mut subheadings = Vec::new();
    let mut in_subheading = false;
    let mut heading_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) if SUBHEADING_LEVELS.contains(&level) => {
                in_subheading = true;
                heading_text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_subheading => {
                heading_text.push_str(&t);
            }
            Event::End(TagEnd::Heading(level)) if SUBHEADING_LEVELS.contains(&level) => {
                if in_subheading {
                    subheadings.push(heading_text.trim().to_string());
                }
                in_subheading = false;
            }
            _ => {}
        }
    }

    subheadings
}

/// Remove top-level subheadings (markdown H2/H3) from a document.
///
/// The returned body keeps everything else byte-for-byte, so subheading
/// words are not double-scanned as body content.
pub fn remove_subheadings(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);

    let mut removals: Vec<std::ops::Range<usize>> = Vec::new();
    let mut open: Option<usize> = None;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) if SUBHEADING_LEVELS.contains(&level) => {
                open = Some(range.start);
            }
            Event::End(TagEnd::Heading(level)) if SUBHEADING_LEVELS.contains(&level) => {
                if let Some(start) = open.take() {
                    removals.push(start..range.end);
                }
            }
            _ => {}
        }
    }

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in removals {
        result.push_str(&text[cursor..range.start]);
        cursor = range.end;
    }
    result.push_str(&text[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
        assert_eq!(sentences[1], "This is another sentence.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Dr. Smith"));
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = split_sentences("The price is 3.14 dollars. That's cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn count_word_occurrences_is_whole_word() {
        let text = "Plant pots and more plant pots. A potted plant.";
        assert_eq!(count_word_occurrences(text, "pots"), 2);
        assert_eq!(count_word_occurrences(text, "pot"), 0);
        assert_eq!(count_word_occurrences(text, "plant"), 3);
    }

    #[test]
    fn subheadings_extracted_and_removed() {
        let text = "# Title\n\nIntro text.\n\n## Choosing pots\n\nBody text.\n\n### Care\n\nMore.";
        let subs = get_subheadings(text);
        assert_eq!(subs, vec!["Choosing pots", "Care"]);

        let stripped = remove_subheadings(text);
        assert!(!stripped.contains("Choosing pots"));
        assert!(!stripped.contains("Care"));
        assert!(stripped.contains("# Title"));
        assert!(stripped.contains("Body text."));
    }

    #[test]
    fn plain_text_passes_through_removal() {
        let text = "Just a paragraph with no headings.";
        assert_eq!(remove_subheadings(text), text);
    }
}
