//! Highlight spans for flagged terms.
//!
//! A [`Mark`] pairs a sentence that contains a flagged word with a copy of
//! that sentence where every occurrence is wrapped in `<mark>` tags. Marks
//! are derived on demand from an assessment result's `words_to_mark`, as a
//! pure function of the result, with no cached state.

use aho_corasick::{AhoCorasick, MatchKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A sentence with highlight markup applied, next to its unmarked original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Mark {
    /// The sentence with `<mark>` spans applied.
    pub marked: String,
    /// The sentence as it appears in the document.
    pub original: String,
}

/// Mark every whole-word occurrence of `words` across `sentences`.
///
/// Matching is case-insensitive; the marked copy preserves the document's
/// casing. Sentences without a match produce no entry.
pub fn mark_words_in_sentences(words: &[String], sentences: &[String]) -> Vec<Mark> {
    if words.is_empty() {
        return Vec::new();
    }
    let Ok(searcher) = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(words)
    else {
        return Vec::new();
    };

    sentences
        .iter()
        .filter_map(|sentence| mark_sentence(&searcher, sentence))
        .collect()
}

fn mark_sentence(searcher: &AhoCorasick, sentence: &str) -> Option<Mark> {
    let mut marked = String::with_capacity(sentence.len());
    let mut cursor = 0;
    let mut any = false;

    for m in searcher.find_iter(sentence) {
        if !is_word_boundary(sentence, m.start(), m.end()) {
            continue;
        }
        marked.push_str(&sentence[cursor..m.start()]);
        marked.push_str("<mark>");
        marked.push_str(&sentence[m.start()..m.end()]);
        marked.push_str("</mark>");
        cursor = m.end();
        any = true;
    }

    if !any {
        return None;
    }
    marked.push_str(&sentence[cursor..]);
    Some(Mark {
        marked,
        original: sentence.to_string(),
    })
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = start == 0
        || text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_alphanumeric());
    let after_ok = end == text.len()
        || text[end..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_alphanumeric());
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn marks_only_matching_sentences() {
        let sentences = vec![
            "An ethnic model of plant pots, ethnic model of plants pots.".to_string(),
            "Nothing relevant here.".to_string(),
        ];
        let marks = mark_words_in_sentences(&words(&["plants"]), &sentences);
        assert_eq!(marks.len(), 1);
        assert_eq!(
            marks[0].marked,
            "An ethnic model of plant pots, ethnic model of <mark>plants</mark> pots."
        );
        assert_eq!(marks[0].original, sentences[0]);
    }

    #[test]
    fn whole_words_only() {
        let sentences = vec!["The pottery class uses a pot.".to_string()];
        let marks = mark_words_in_sentences(&words(&["pot"]), &sentences);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].marked, "The pottery class uses a <mark>pot</mark>.");
    }

    #[test]
    fn case_insensitive_match_keeps_document_casing() {
        let sentences = vec!["Plants everywhere.".to_string()];
        let marks = mark_words_in_sentences(&words(&["plants"]), &sentences);
        assert_eq!(marks[0].marked, "<mark>Plants</mark> everywhere.");
    }

    #[test]
    fn no_words_no_marks() {
        let sentences = vec!["Anything.".to_string()];
        assert!(mark_words_in_sentences(&[], &sentences).is_empty());
    }
}
