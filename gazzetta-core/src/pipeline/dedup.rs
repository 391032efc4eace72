//! Near-duplicate removal by normalized-title similarity.

use std::sync::LazyLock;

use gazzetta_types::Article;
use regex::Regex;

/// Minimum similarity score at which two normalized titles are duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Boilerplate lead-ins stripped from the start of a lowercased title, in order.
const PREFIXES: &[&str] = &["breaking:", "exclusive:", "just in:", "update:", "alert:"];

/// Anything that is not a letter, a number or whitespace, by general category.
#[allow(clippy::expect_used)]
static NOT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("valid regex"));

/// Normalize a title for similarity comparison.
///
/// Lowercases, strips the boilerplate prefixes, drops every character outside
/// the Unicode letter, number and whitespace categories (combining marks
/// included), collapses whitespace runs to one space and trims.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let mut lowered = title.to_lowercase();
    for prefix in PREFIXES {
        if let Some(rest) = lowered.strip_prefix(prefix) {
            lowered = rest.trim().to_string();
        }
    }
    NOT_WORD
        .replace_all(&lowered, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether two normalized titles describe the same story.
///
/// True when either contains the other, or when the Levenshtein similarity
/// `1 - distance / max_len` (in chars) reaches [`SIMILARITY_THRESHOLD`].
/// Symmetric in its arguments.
#[must_use]
pub fn titles_similar(a: &str, b: &str) -> bool {
    if a.contains(b) || b.contains(a) {
        return true;
    }
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return true;
    }
    let distance = strsim::levenshtein(a, b);
    #[allow(clippy::cast_precision_loss)]
    let similarity = 1.0 - (distance as f64 / max_len as f64);
    similarity >= SIMILARITY_THRESHOLD
}

/// Drop articles whose title is similar to an earlier accepted one.
///
/// Input order is preserved and the first article of each cluster wins.
/// Each candidate is compared against accepted titles only, so the cost is
/// quadratic in the number of survivors; fine for the tens of articles a
/// single query yields.
#[must_use]
pub fn dedupe(articles: Vec<Article>) -> Vec<Article> {
    let mut accepted: Vec<String> = Vec::with_capacity(articles.len());
    let mut out = Vec::with_capacity(articles.len());
    for article in articles {
        let normalized = normalize_title(&article.title);
        if accepted.iter().any(|seen| titles_similar(&normalized, seen)) {
            #[cfg(feature = "tracing")]
            tracing::debug!(title = %article.title, "dropping near-duplicate article");
            continue;
        }
        accepted.push(normalized);
        out.push(article);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            url: String::new(),
            source: "Test".to_string(),
            published_at: Utc::now() - Duration::minutes(5),
            image_url: None,
        }
    }

    #[test]
    fn normalization_strips_prefix_and_punctuation() {
        assert_eq!(
            normalize_title("BREAKING:  Apple   Beats Earnings!!"),
            "apple beats earnings"
        );
        assert_eq!(normalize_title("Update: Alert: Fed holds"), "fed holds");
        assert_eq!(normalize_title("Café déjà-vu, 2024"), "café déjàvu 2024");
    }

    #[test]
    fn combining_marks_are_dropped() {
        // decomposed "é" is "e" plus U+0301
        assert_eq!(normalize_title("Cafe\u{301} Nestle\u{301}"), "cafe nestle");
        assert!(titles_similar(
            &normalize_title("Nestle\u{301} raises prices"),
            &normalize_title("Nestle raises prices")
        ));
    }

    #[test]
    fn prefix_only_at_start() {
        assert_eq!(
            normalize_title("Markets update: stocks rally"),
            "markets update stocks rally"
        );
    }

    #[test]
    fn substring_is_similar() {
        assert!(titles_similar("apple beats earnings", "apple beats earnings again today"));
        assert!(titles_similar("", "anything"));
        assert!(titles_similar("", ""));
    }

    #[test]
    fn edit_distance_threshold() {
        assert!(titles_similar("tesla shares climb", "tesla shares climbs"));
        assert!(!titles_similar("tesla shares climb", "nvidia unveils chip"));
    }

    #[test]
    fn first_seen_wins() {
        let out = dedupe(vec![
            article("Apple Beats Earnings"),
            article("apple beats earnings!!"),
            article("Microsoft cloud revenue jumps"),
        ]);
        let titles: Vec<_> = out.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Apple Beats Earnings", "Microsoft cloud revenue jumps"]);
    }

    #[test]
    fn rejected_titles_are_not_reference_points() {
        // "b" is dropped as similar to "a"; "c" is similar to "b" only and must survive.
        let a = "fed holds rates steady now";
        let b = "fed holds rates steady new";
        let c = "fex halds ratzs stxady nex";
        assert!(titles_similar(&normalize_title(a), &normalize_title(b)));
        assert!(titles_similar(&normalize_title(b), &normalize_title(c)));
        assert!(!titles_similar(&normalize_title(a), &normalize_title(c)));
        let out = dedupe(vec![article(a), article(b), article(c)]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].title, c);
    }
}
