//! Pure formatting of question entries for display.

use std::sync::OnceLock;

use regex::Regex;
use teloxide::utils::html;

/// `? : ; !` take a single space on both sides
fn double_punctuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*([?:;!])\s*").unwrap())
}

/// `,` and `.` take a single space after, none before
fn single_punctuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*([,.])\s*").unwrap())
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn quote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\s*"\s*"#).unwrap())
}

/// Apply French typographic spacing to `text`.
///
/// Passes run in a fixed order: double punctuation, single punctuation,
/// whitespace collapsing, trim, then straight double-quote padding. The
/// collapsing pass cleans up artifacts left by the punctuation passes.
pub fn normalize_punctuation(text: &str) -> String {
    let text = double_punctuation_re().replace_all(text, " $1 ");
    let text = single_punctuation_re().replace_all(&text, "$1 ");
    let text = whitespace_re().replace_all(&text, " ");
    let text = text.trim();
    quote_re().replace_all(text, " \" ").into_owned()
}

/// Format a question entry for display.
///
/// A content blob holding a blank line is split at its first occurrence into
/// a question segment (bold, prefixed with the number) and an answer segment.
/// Without the separator the whole blob is emitted after a bold `"<id>."`
/// prefix. Content is HTML-escaped before the markup is applied.
pub fn format_entry(id: &str, content: &str) -> String {
    match content.split_once("\n\n") {
        Some((question, answer)) => {
            let question = normalize_punctuation(question.trim());
            let answer = normalize_punctuation(answer.trim());
            format!(
                "<b>{}. {}</b>\n\n{}",
                html::escape(id),
                html::escape(&question),
                html::escape(&answer)
            )
        }
        None => {
            let content = normalize_punctuation(content.trim());
            format!("<b>{}.</b> {}", html::escape(id), html::escape(&content))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_double_punctuation_spacing() {
        // Space inserted on both sides of ? : ; !
        assert_eq!(normalize_punctuation("Bonjour , ça va ?"), "Bonjour, ça va ?");
        assert_eq!(normalize_punctuation("Non:oui"), "Non : oui");
        assert_eq!(normalize_punctuation("Quoi?Rien;tout !"), "Quoi ? Rien ; tout !");
    }

    #[test]
    fn test_normalize_single_punctuation_spacing() {
        // No space before comma/period, exactly one after
        assert_eq!(normalize_punctuation("un ,deux .trois"), "un, deux. trois");
        assert_eq!(normalize_punctuation("fin."), "fin.");
    }

    #[test]
    fn test_normalize_collapses_and_trims_whitespace() {
        assert_eq!(normalize_punctuation("  trop   d'espaces  "), "trop d'espaces");
    }

    #[test]
    fn test_normalize_pads_straight_quotes() {
        assert_eq!(
            normalize_punctuation("il a dit \"oui\" hier"),
            "il a dit \" oui \" hier"
        );
    }

    #[test]
    fn test_format_entry_with_question_and_answer() {
        let formatted = format_entry("1", "Question text\n\nAnswer text");
        assert_eq!(formatted, "<b>1. Question text</b>\n\nAnswer text");
    }

    #[test]
    fn test_format_entry_splits_at_first_blank_line_only() {
        // A second blank line stays inside the answer segment and is later
        // collapsed by normalization
        let formatted = format_entry("3", "Q\n\nA part one\n\nA part two");
        assert_eq!(formatted, "<b>3. Q</b>\n\nA part one A part two");
    }

    #[test]
    fn test_format_entry_without_separator() {
        let formatted = format_entry("2", "Single blob no separator");
        assert_eq!(formatted, "<b>2.</b> Single blob no separator");
    }

    #[test]
    fn test_format_entry_escapes_html() {
        let formatted = format_entry("4", "a < b\n\nc & d");
        assert_eq!(formatted, "<b>4. a &lt; b</b>\n\nc &amp; d");
    }

    #[test]
    fn test_format_entry_is_deterministic() {
        let content = "Quelle est ta seule assurance ?\n\nQue j'appartiens à Jésus-Christ.";
        assert_eq!(format_entry("1", content), format_entry("1", content));
    }

    #[test]
    fn test_format_entry_never_empty() {
        // Even empty content keeps the numbered prefix
        assert_eq!(format_entry("7", ""), "<b>7.</b> ");
    }
}
