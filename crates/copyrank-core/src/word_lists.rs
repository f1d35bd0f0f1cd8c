//! Curated word lists for content analysis.
//!
//! Currently a single list: the English function words excluded from
//! keyphrase tokens and prominent-word candidates.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words (articles, prepositions, auxiliaries, ...).
///
/// Words in this set carry no topical signal: they are skipped when reading
/// content tokens out of a keyphrase and filtered from prominent-word
/// candidates. Threaded through extraction as an explicit parameter so
/// callers can substitute a list for another language.
pub static FUNCTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "nor", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "up", "down", "out", "off", "over", "under", "about", "into", "onto",
        "through", "during", "before", "after", "between", "against", "among", "that", "this",
        "these", "those", "it", "its", "they", "them", "their", "theirs", "we", "us", "our",
        "ours", "you", "your", "yours", "he", "him", "his", "she", "her", "hers", "i", "me", "my",
        "mine", "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had",
        "having", "do", "does", "did", "doing", "will", "would", "shall", "should", "could",
        "may", "might", "must", "can", "cannot", "which", "who", "whom", "whose", "what", "when",
        "where", "why", "how", "if", "than", "then", "else", "as", "so", "too", "very", "just",
        "also", "not", "no", "yes", "there", "here", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "only", "own", "same", "because", "while", "until",
        "once", "again", "further", "per",
    ]
    .into_iter()
    .collect()
});

/// Check whether `word` (already lowercased) is a function word.
pub fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles_are_function_words() {
        assert!(is_function_word("the"));
        assert!(is_function_word("an"));
    }

    #[test]
    fn content_words_are_not() {
        assert!(!is_function_word("plant"));
        assert!(!is_function_word("pots"));
    }
}
