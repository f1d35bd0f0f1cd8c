//! Message catalog seam.
//!
//! Assessments never hardcode user-facing strings: they look up a template
//! by key and format it with positional arguments. The engine only embeds
//! the produced string in a result; it never inspects its structure.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Produces localized, formatted feedback messages.
pub trait Translator {
    /// Look up the message template for `key`.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Substitute `%1$s`, `%2$s`, ... positional slots in `template`.
    fn format(&self, template: &str, args: &[&str]) -> String {
        let mut message = template.to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("%{}$s", i + 1), arg);
        }
        message
    }

    /// Look up and format in one step. Unknown keys produce an empty string.
    fn message(&self, key: &str, args: &[&str]) -> String {
        self.lookup(key)
            .map(|template| self.format(template, args))
            .unwrap_or_default()
    }
}

static ENGLISH_TEMPLATES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "ranking-intention-consideration",
            "%1$sRanking intention%2$s: Include your keyphrase in the text so that we can \
             check ranking intention.",
        ),
        (
            "ranking-intention-good",
            "%1$sRanking intention%2$s: Your text reflects your ranking intention. Good job!",
        ),
        (
            "ranking-intention-ok",
            "%1$sRanking intention%2$s: Your text does not reflect any particular ranking \
             intention. If your keyphrase is singular, use more singular occurrences; if your \
             keyphrase is plural, use more plural occurrences!",
        ),
        (
            "ranking-intention-bad",
            "%1$sRanking intention%2$s: Your text does not reflect your ranking intention. \
             %3$sChange your keyphrase occurrences%2$s!",
        ),
        (
            "text-length-good",
            "%1$sText length%2$s: The text contains %3$s words. Good job!",
        ),
        (
            "text-length-slightly-short",
            "%1$sText length%2$s: The text contains %3$s words. This is slightly below the \
             recommended minimum of %4$s words. %5$sAdd a bit more copy%2$s.",
        ),
        (
            "text-length-short",
            "%1$sText length%2$s: The text contains %3$s words. This is below the recommended \
             minimum of %4$s words. %5$sAdd more content%2$s.",
        ),
        (
            "text-length-far-too-short",
            "%1$sText length%2$s: The text contains %3$s words. This is far below the \
             recommended minimum of %4$s words. %5$sAdd more content%2$s.",
        ),
        (
            "meta-description-good",
            "%1$sMeta description length%2$s: Well done!",
        ),
        (
            "meta-description-short",
            "%1$sMeta description length%2$s: The meta description is too short (under %3$s \
             characters). Up to %4$s characters are available. %5$sUse the space%2$s!",
        ),
        (
            "meta-description-long",
            "%1$sMeta description length%2$s: The meta description is over %4$s characters. To \
             ensure the entire description will be visible, %5$sreduce the length%2$s!",
        ),
        ("score-rating-na", "No keyphrase"),
        ("score-rating-bad", "Bad SEO score"),
        ("score-rating-ok", "Ok SEO score"),
        ("score-rating-good", "Good SEO score"),
    ])
});

/// The built-in English message catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl Translator for EnglishCatalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        ENGLISH_TEMPLATES.get(key).copied()
    }
}

/// Build the anchor opening tag assessments embed before their message label.
pub fn anchor_opening_tag(url: &str) -> String {
    format!("<a href='{url}' target='_blank'>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_slots_substitute_in_any_order() {
        let catalog = EnglishCatalog;
        let out = catalog.format("%2$s then %1$s", &["first", "second"]);
        assert_eq!(out, "second then first");
    }

    #[test]
    fn known_key_formats() {
        let catalog = EnglishCatalog;
        let out = catalog.message(
            "ranking-intention-good",
            &[&anchor_opening_tag("https://copyrank.dev/ranking-intention"), "</a>"],
        );
        assert!(out.starts_with(
            "<a href='https://copyrank.dev/ranking-intention' target='_blank'>Ranking intention</a>:"
        ));
        assert!(out.ends_with("Good job!"));
    }

    #[test]
    fn unknown_key_is_empty() {
        assert_eq!(EnglishCatalog.message("no-such-key", &[]), "");
    }
}
